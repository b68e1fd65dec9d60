use cxkit::prelude::*;
use num_complex::Complex64;
use serde_json::json;

fn complex_operations(z1: Complex, z2: Complex) -> (Complex, f64, f64) {
    let sum = z1 + z2;
    let magnitude = z1.abs();
    let phase = z1.arg();

    println!("z1 = {}", z1);
    println!("z2 = {}", z2);
    println!("z1 + z2 = {}", sum);
    println!("z1 / z2 = {}", z1 / z2);
    println!("|z1| = {}", magnitude);
    println!("arg(z1) = {}", phase);
    println!("z1* = {}", z1.conjugate());
    println!("exp(z1) = {}", z1.exp());
    println!("log(z1) = {}", z1.log());
    println!("sqrt(z1) = {}", z1.sqrt());
    println!("z1^z2 = {}", z1.pow(z2));

    (sum, magnitude, phase)
}

fn main() -> Result<()> {
    println!("=== Construction ===");
    let z1 = Complex::parse("3 + 4i")?;
    let z2 = Complex::try_from(&json!({"abs": 2.0, "arg": std::f64::consts::FRAC_PI_4}))?;
    let z3 = Complex::from(Complex64::new(-1.0, 0.5));
    println!("from text: {}", z1);
    println!("from polar object: {}", z2.round(6));
    println!("from num-complex: {}", z3);

    match Complex::parse("3 + 4") {
        Ok(z) => println!("parsed {}", z),
        Err(err) => println!("rejected: {}", err),
    }
    if let Err(err) = Complex::parse("2 +") {
        println!("rejected: {}", err);
    }

    println!("\n=== Arithmetic ===");
    complex_operations(z1, complex!(1, 2));

    println!("\n=== Poles ===");
    let (zero, inf) = (Complex::ZERO, Complex::INFINITY);
    println!("1 / 0 = {}", Complex::ONE / zero);
    println!("0 / ∞ = {}", zero / inf);
    println!("∞ - ∞ = {}", inf - Complex::INFINITY);
    println!("∞ · 0 = {}", inf * zero);
    println!("pole of i^2 = {}", Complex::I.pow(2.0).pole());

    println!("\n=== Trigonometric and Hyperbolic Functions ===");
    let z = complex!(1.0, 0.5);
    println!("z = {}", z);
    println!("sin(z) = {}", z.sin());
    println!("cos(z) = {}", z.cos());
    println!("tan(z) = {}", z.tan());
    println!("sinh(z) = {}", z.sinh());
    println!("cosh(z) = {}", z.cosh());
    println!("tanh(z) = {}", z.tanh());
    println!("asin(sin(z)) = {}", z.sin().asin());
    println!("atanh(tanh(z)) = {}", z.tanh().atanh());

    println!("\n=== Rounding ===");
    let w = complex!(1.23456, -6.54321);
    for mode in [Rounding::Ceil, Rounding::Floor, Rounding::Round] {
        println!("{}(w, 2) = {}", mode, w.round_with(mode, 2));
    }

    Ok(())
}
