// Complete Binary Operation Dispatcher
// Higher-order functions: closures, function pointers, and an operation registry

use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// Milestone 1: Higher-Order Dispatch
// ============================================================================

/// Applies a caller-supplied binary operation to two integers. The dispatcher
/// itself performs no arithmetic.
pub fn apply_operation(a: i64, b: i64, op: impl Fn(i64, i64) -> i64) -> i64 {
    op(a, b)
}

// ============================================================================
// Milestone 2: Function Pointers Interchangeable with Closures
// ============================================================================

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub fn sub(a: i64, b: i64) -> i64 {
    a - b
}

pub fn mul(a: i64, b: i64) -> i64 {
    a * b
}

/// A closure capturing its environment still satisfies the same `Fn` bound as
/// a plain function pointer.
pub fn scaled_sum(scale: i64) -> impl Fn(i64, i64) -> i64 {
    move |a, b| (a + b) * scale
}

// ============================================================================
// Milestone 3: Operation Enum with Checked Evaluation
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl OpKind {
    pub fn eval(&self, a: i64, b: i64) -> Result<i64, OpError> {
        match self {
            OpKind::Add => Ok(a + b),
            OpKind::Sub => Ok(a - b),
            OpKind::Mul => Ok(a * b),
            OpKind::Div => {
                if b == 0 {
                    Err(OpError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self, OpError> {
        match symbol {
            "+" => Ok(OpKind::Add),
            "-" => Ok(OpKind::Sub),
            "*" => Ok(OpKind::Mul),
            "/" => Ok(OpKind::Div),
            other => Err(OpError::UnknownOperation(other.to_string())),
        }
    }
}

// ============================================================================
// Milestone 4: Operation Registry
// ============================================================================

pub struct OperationRegistry {
    ops: HashMap<String, Box<dyn Fn(i64, i64) -> i64>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self {
            ops: HashMap::new(),
        }
    }

    /// Registry preloaded with the three standard operations.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("sum", add);
        registry.register("difference", sub);
        registry.register("product", mul);
        registry
    }

    pub fn register(&mut self, name: &str, op: impl Fn(i64, i64) -> i64 + 'static) {
        self.ops.insert(name.to_string(), Box::new(op));
    }

    pub fn apply(&self, name: &str, a: i64, b: i64) -> Result<i64, OpError> {
        let op = self
            .ops
            .get(name)
            .ok_or_else(|| OpError::UnknownOperation(name.to_string()))?;
        Ok(op(a, b))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ops.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn main() {
    let x = 10;
    let y = 5;

    println!("=== Milestone 1: Closures passed to a higher-order function ===");
    let sum = apply_operation(x, y, |a, b| a + b);
    let difference = apply_operation(x, y, |a, b| a - b);
    let product = apply_operation(x, y, |a, b| a * b);
    println!("Sum: {sum}");
    println!("Difference: {difference}");
    println!("Product: {product}");

    println!("\n=== Milestone 2: Function pointers and capturing closures ===");
    println!("add as fn pointer: {}", apply_operation(x, y, add));
    println!("sub as fn pointer: {}", apply_operation(x, y, sub));
    println!("mul as fn pointer: {}", apply_operation(x, y, mul));
    let doubled = scaled_sum(2);
    println!("scaled sum (x2): {}", apply_operation(x, y, doubled));

    println!("\n=== Milestone 3: Checked evaluation ===");
    match OpKind::Div.eval(x, y) {
        Ok(quotient) => println!("Quotient: {quotient}"),
        Err(err) => eprintln!("Failed: {err}"),
    }
    if let Err(err) = OpKind::Div.eval(x, 0) {
        println!("Division by zero rejected: {err}");
    }

    println!("\n=== Milestone 4: Operation registry ===");
    let registry = OperationRegistry::with_defaults();
    for name in registry.names() {
        match registry.apply(name, x, y) {
            Ok(result) => println!("{name}: {result}"),
            Err(err) => eprintln!("{name}: {err}"),
        }
    }
    if let Err(err) = registry.apply("modulo", x, y) {
        println!("Lookup failure reported: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Milestone 1 Tests
    #[test]
    fn test_apply_operation_with_closures() {
        assert_eq!(apply_operation(10, 5, |a, b| a + b), 15);
        assert_eq!(apply_operation(10, 5, |a, b| a - b), 5);
        assert_eq!(apply_operation(10, 5, |a, b| a * b), 50);
    }

    #[test]
    fn test_apply_operation_is_order_sensitive() {
        assert_eq!(apply_operation(5, 10, |a, b| a - b), -5);
    }

    // Milestone 2 Tests
    #[test]
    fn test_function_pointers() {
        assert_eq!(apply_operation(10, 5, add), 15);
        assert_eq!(apply_operation(10, 5, sub), 5);
        assert_eq!(apply_operation(10, 5, mul), 50);
    }

    #[test]
    fn test_capturing_closure() {
        let tripled = scaled_sum(3);
        assert_eq!(apply_operation(10, 5, tripled), 45);
    }

    // Milestone 3 Tests
    #[test]
    fn test_op_kind_eval() {
        assert_eq!(OpKind::Add.eval(10, 5), Ok(15));
        assert_eq!(OpKind::Sub.eval(10, 5), Ok(5));
        assert_eq!(OpKind::Mul.eval(10, 5), Ok(50));
        assert_eq!(OpKind::Div.eval(10, 5), Ok(2));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(OpKind::Div.eval(10, 0), Err(OpError::DivisionByZero));
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(OpKind::from_symbol("+"), Ok(OpKind::Add));
        assert_eq!(OpKind::from_symbol("/"), Ok(OpKind::Div));
        assert_eq!(
            OpKind::from_symbol("%"),
            Err(OpError::UnknownOperation("%".to_string()))
        );
    }

    // Milestone 4 Tests
    #[test]
    fn test_registry_defaults() {
        let registry = OperationRegistry::with_defaults();
        assert_eq!(registry.apply("sum", 10, 5), Ok(15));
        assert_eq!(registry.apply("difference", 10, 5), Ok(5));
        assert_eq!(registry.apply("product", 10, 5), Ok(50));
    }

    #[test]
    fn test_registry_unknown_operation() {
        let registry = OperationRegistry::with_defaults();
        assert_eq!(
            registry.apply("modulo", 10, 5),
            Err(OpError::UnknownOperation("modulo".to_string()))
        );
    }

    #[test]
    fn test_registry_custom_closure() {
        let mut registry = OperationRegistry::new();
        let offset = 100;
        registry.register("offset_sum", move |a, b| a + b + offset);
        assert_eq!(registry.apply("offset_sum", 10, 5), Ok(115));
    }

    #[test]
    fn test_registry_names_sorted() {
        let registry = OperationRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["difference", "product", "sum"]);
    }
}
