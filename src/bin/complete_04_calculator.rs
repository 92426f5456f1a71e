// Complete Calculator Interface
// Single-method trait objects with checked arithmetic and a symbol factory

use thiserror::Error;

// ============================================================================
// Milestone 1: Interface and a Boxed Concrete Implementation
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operator '{0}'")]
    UnknownOperator(char),
}

pub trait Calculator {
    fn symbol(&self) -> char;
    fn calculate(&self, a: i64, b: i64) -> Result<i64, CalcError>;
}

pub struct Multiplication;

impl Calculator for Multiplication {
    fn symbol(&self) -> char {
        '*'
    }

    fn calculate(&self, a: i64, b: i64) -> Result<i64, CalcError> {
        Ok(a * b)
    }
}

// ============================================================================
// Milestone 2: Full Operation Set
// ============================================================================

pub struct Addition;

impl Calculator for Addition {
    fn symbol(&self) -> char {
        '+'
    }

    fn calculate(&self, a: i64, b: i64) -> Result<i64, CalcError> {
        Ok(a + b)
    }
}

pub struct Subtraction;

impl Calculator for Subtraction {
    fn symbol(&self) -> char {
        '-'
    }

    fn calculate(&self, a: i64, b: i64) -> Result<i64, CalcError> {
        Ok(a - b)
    }
}

// ============================================================================
// Milestone 3: Checked Division
// ============================================================================

pub struct Division;

impl Calculator for Division {
    fn symbol(&self) -> char {
        '/'
    }

    fn calculate(&self, a: i64, b: i64) -> Result<i64, CalcError> {
        if b == 0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }
}

// ============================================================================
// Milestone 4: Symbol Factory
// ============================================================================

pub fn calculator_for(symbol: char) -> Result<Box<dyn Calculator>, CalcError> {
    match symbol {
        '+' => Ok(Box::new(Addition)),
        '-' => Ok(Box::new(Subtraction)),
        '*' => Ok(Box::new(Multiplication)),
        '/' => Ok(Box::new(Division)),
        other => Err(CalcError::UnknownOperator(other)),
    }
}

pub fn evaluate(symbol: char, a: i64, b: i64) -> Result<i64, CalcError> {
    calculator_for(symbol)?.calculate(a, b)
}

fn main() {
    println!("=== Milestone 1: Boxed trait object ===");
    let calc: Box<dyn Calculator> = Box::new(Multiplication);
    match calc.calculate(6, 7) {
        Ok(result) => println!("Result: {result}"),
        Err(err) => eprintln!("Calculation failed: {err}"),
    }

    println!("\n=== Milestone 2: Heterogeneous operation set ===");
    let calculators: Vec<Box<dyn Calculator>> = vec![
        Box::new(Addition),
        Box::new(Subtraction),
        Box::new(Multiplication),
        Box::new(Division),
    ];
    for calculator in &calculators {
        match calculator.calculate(6, 7) {
            Ok(result) => println!("6 {} 7 = {result}", calculator.symbol()),
            Err(err) => println!("6 {} 7 failed: {err}", calculator.symbol()),
        }
    }

    println!("\n=== Milestone 3: Checked division ===");
    let division = Division;
    match division.calculate(42, 6) {
        Ok(result) => println!("42 / 6 = {result}"),
        Err(err) => eprintln!("Failed: {err}"),
    }
    if let Err(err) = division.calculate(42, 0) {
        println!("Zero divisor rejected: {err}");
    }

    println!("\n=== Milestone 4: Symbol factory ===");
    for symbol in ['+', '-', '*', '/'] {
        match evaluate(symbol, 6, 7) {
            Ok(result) => println!("6 {symbol} 7 = {result}"),
            Err(err) => println!("6 {symbol} 7 failed: {err}"),
        }
    }
    if let Err(err) = evaluate('%', 6, 7) {
        println!("Unsupported operator reported: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Milestone 1 Tests
    #[test]
    fn test_multiplication_through_trait_object() {
        let calc: Box<dyn Calculator> = Box::new(Multiplication);
        assert_eq!(calc.calculate(6, 7), Ok(42));
        assert_eq!(calc.symbol(), '*');
    }

    // Milestone 2 Tests
    #[test]
    fn test_full_operation_set() {
        assert_eq!(Addition.calculate(6, 7), Ok(13));
        assert_eq!(Subtraction.calculate(6, 7), Ok(-1));
        assert_eq!(Multiplication.calculate(6, 7), Ok(42));
        assert_eq!(Division.calculate(42, 7), Ok(6));
    }

    #[test]
    fn test_heterogeneous_calculators() {
        let calculators: Vec<Box<dyn Calculator>> = vec![
            Box::new(Addition),
            Box::new(Subtraction),
            Box::new(Multiplication),
        ];
        let results: Vec<i64> = calculators
            .iter()
            .map(|calc| calc.calculate(10, 5).unwrap())
            .collect();
        assert_eq!(results, vec![15, 5, 50]);
    }

    // Milestone 3 Tests
    #[test]
    fn test_division_by_zero() {
        assert_eq!(Division.calculate(42, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_division_truncates() {
        assert_eq!(Division.calculate(7, 2), Ok(3));
        assert_eq!(Division.calculate(-7, 2), Ok(-3));
    }

    // Milestone 4 Tests
    #[test]
    fn test_factory_known_symbols() {
        for (symbol, expected) in [('+', 13), ('-', -1), ('*', 42)] {
            assert_eq!(evaluate(symbol, 6, 7), Ok(expected));
        }
        assert_eq!(evaluate('/', 42, 7), Ok(6));
    }

    #[test]
    fn test_factory_unknown_symbol() {
        assert_eq!(evaluate('%', 6, 7), Err(CalcError::UnknownOperator('%')));
    }

    #[test]
    fn test_factory_division_by_zero_propagates() {
        assert_eq!(evaluate('/', 1, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_factory_returns_matching_symbol() {
        let calc = calculator_for('/').unwrap();
        assert_eq!(calc.symbol(), '/');
    }
}
