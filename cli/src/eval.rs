//! Parsing and evaluating a single `<width> <lhs> <op> <rhs>` request.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use ckint_types::{CheckedIntegral, Integer};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Width {
    #[value(name = "i8")]
    I8,
    #[value(name = "i16")]
    I16,
    #[value(name = "i32")]
    I32,
    #[value(name = "i64")]
    I64,
    #[value(name = "isize")]
    Isize,
    #[value(name = "u8")]
    U8,
    #[value(name = "u16")]
    U16,
    #[value(name = "u32")]
    U32,
    #[value(name = "u64")]
    U64,
    #[value(name = "usize")]
    Usize,
}

impl Width {
    pub const fn as_str(self) -> &'static str {
        match self {
            Width::I8 => "i8",
            Width::I16 => "i16",
            Width::I32 => "i32",
            Width::I64 => "i64",
            Width::Isize => "isize",
            Width::U8 => "u8",
            Width::U16 => "u16",
            Width::U32 => "u32",
            Width::U64 => "u64",
            Width::Usize => "usize",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
}

impl FromStr for Op {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw {
            "+" => Op::Add,
            "-" => Op::Sub,
            "*" | "x" => Op::Mul,
            "/" => Op::Div,
            "%" => Op::Rem,
            "&" => Op::And,
            "|" => Op::Or,
            "^" => Op::Xor,
            "<<" => Op::Shl,
            ">>" => Op::Shr,
            _ => return Err(format!("expected one of + - * / % & | ^ << >>, got `{raw}`")),
        })
    }
}

impl Op {
    pub const fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
            Op::And => "&",
            Op::Or => "|",
            Op::Xor => "^",
            Op::Shl => "<<",
            Op::Shr => ">>",
        }
    }

    fn apply<T: Integer>(self, lhs: CheckedIntegral<T>, rhs: T) -> CheckedIntegral<T> {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
            Op::Rem => lhs % rhs,
            Op::And => lhs & rhs,
            Op::Or => lhs | rhs,
            Op::Xor => lhs ^ rhs,
            Op::Shl => lhs << rhs,
            Op::Shr => lhs >> rhs,
        }
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "ckint")]
#[command(about = "Evaluate one checked integer operation")]
#[command(
    after_help = "Operands accept decimal, 0x, 0o and 0b literals with an optional sign and `_` separators."
)]
pub struct Request {
    /// Integer width to evaluate in
    pub width: Width,
    /// Left operand
    #[arg(allow_hyphen_values = true)]
    pub lhs: String,
    /// Operator: + - * / % & | ^ << >>
    pub op: Op,
    /// Right operand
    #[arg(allow_hyphen_values = true)]
    pub rhs: String,
    /// Print the result in hexadecimal
    #[arg(long)]
    pub hex: bool,
}

/// Report an operand that failed to parse the way clap reports any other
/// bad argument, so it exits with the usage status.
pub fn operand_error(err: &anyhow::Error) -> clap::Error {
    Request::command().error(ErrorKind::ValueValidation, format!("{err:#}"))
}

/// The rendered result of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub rendered: String,
    pub valid: bool,
}

/// Parse a decimal, `0x`, `0o` or `0b` literal with an optional sign.
fn parse_operand<T>(raw: &str, width: Width) -> Result<T>
where
    T: Integer + TryFrom<i128>,
{
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        _ => (10, digits),
    };
    let digits = digits.replace('_', "");
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        bail!("`{raw}` is not an integer");
    }

    let magnitude = i128::from_str_radix(&digits, radix)
        .with_context(|| format!("`{raw}` is not an integer"))?;
    let value = if negative { -magnitude } else { magnitude };
    T::try_from(value).map_err(|_| anyhow!("`{raw}` does not fit in {width}"))
}

fn evaluate_as<T>(request: &Request) -> Result<Evaluation>
where
    T: Integer + TryFrom<i128>,
{
    let lhs = parse_operand::<T>(&request.lhs, request.width).context("left operand")?;
    let rhs = parse_operand::<T>(&request.rhs, request.width).context("right operand")?;

    let result = request.op.apply(CheckedIntegral::<T>::new(lhs), rhs).acknowledge();
    let rendered = if request.hex {
        format!("{result:#x}")
    } else {
        result.to_string()
    };

    if result.is_invalid() {
        tracing::info!(
            width = request.width.as_str(),
            op = request.op.symbol(),
            lhs = %request.lhs,
            rhs = %request.rhs,
            "Result is invalid"
        );
    }

    Ok(Evaluation {
        rendered,
        valid: result.is_valid(),
    })
}

pub fn evaluate(request: &Request) -> Result<Evaluation> {
    tracing::debug!(
        width = request.width.as_str(),
        op = request.op.symbol(),
        "Evaluating"
    );
    match request.width {
        Width::I8 => evaluate_as::<i8>(request),
        Width::I16 => evaluate_as::<i16>(request),
        Width::I32 => evaluate_as::<i32>(request),
        Width::I64 => evaluate_as::<i64>(request),
        Width::Isize => evaluate_as::<isize>(request),
        Width::U8 => evaluate_as::<u8>(request),
        Width::U16 => evaluate_as::<u16>(request),
        Width::U32 => evaluate_as::<u32>(request),
        Width::U64 => evaluate_as::<u64>(request),
        Width::Usize => evaluate_as::<usize>(request),
    }
}
