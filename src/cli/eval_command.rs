use std::str::FromStr;

use clap::{arg, ArgMatches, Command};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::error::Error;
use crate::int::Int;
use crate::ty::IntType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum EvalOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    And,
    Or,
    Xor,
    Not,
    Neg,
    Cmp,
    Widen,
    Narrow,
}

impl EvalOp {
    fn is_unary(self) -> bool {
        matches!(self, EvalOp::Not | EvalOp::Neg)
    }
}

fn op_names() -> String {
    EvalOp::iter()
        .map(|op| op.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unknown operation `{0}`, expected one of: {}", op_names())]
    UnknownOp(String),
    #[error("`{0}` needs a right-hand operand")]
    MissingOperand(EvalOp),
    #[error("`{0}` takes no right-hand operand")]
    UnexpectedOperand(EvalOp),
    #[error("invalid {what} `{value}`")]
    InvalidNumber { what: &'static str, value: String },
    #[error(transparent)]
    Int(#[from] Error),
}

/// Evaluates one operation and renders the result as decimal text, or as
/// `less`/`equal`/`greater` for `cmp`.
pub fn evaluate(ty: &str, lhs: &str, op: &str, rhs: Option<&str>) -> Result<String, EvalError> {
    let ty = IntType::from_str(ty)?;
    let op = EvalOp::from_str(op).map_err(|_| EvalError::UnknownOp(op.to_string()))?;
    let lhs = Int::parse(lhs, ty)?;

    let rhs = match (op.is_unary(), rhs) {
        (true, Some(_)) => return Err(EvalError::UnexpectedOperand(op)),
        (true, None) => "",
        (false, None) => return Err(EvalError::MissingOperand(op)),
        (false, Some(rhs)) => rhs,
    };
    let operand = || Int::parse(rhs, ty);
    let number = |what: &'static str| {
        rhs.parse::<i64>().map_err(|_| EvalError::InvalidNumber {
            what,
            value: rhs.to_string(),
        })
    };
    let bits = |what: &'static str| {
        rhs.parse::<u32>().map_err(|_| EvalError::InvalidNumber {
            what,
            value: rhs.to_string(),
        })
    };

    let result = match op {
        EvalOp::Add => lhs.add(&operand()?)?,
        EvalOp::Sub => lhs.sub(&operand()?)?,
        EvalOp::Mul => lhs.mul(&operand()?)?,
        EvalOp::Div => lhs.div(&operand()?)?,
        EvalOp::Rem => lhs.rem(&operand()?)?,
        EvalOp::Shl => lhs.shl(number("shift amount")?)?,
        EvalOp::Shr => lhs.shr(number("shift amount")?)?,
        EvalOp::And => lhs.and(&operand()?)?,
        EvalOp::Or => lhs.or(&operand()?)?,
        EvalOp::Xor => lhs.xor(&operand()?)?,
        EvalOp::Not => lhs.not(),
        EvalOp::Neg => lhs.neg(),
        EvalOp::Cmp => {
            let ordering = lhs.compare(&operand()?)?;
            return Ok(format!("{ordering:?}").to_lowercase());
        }
        EvalOp::Widen => lhs.widen(bits("width")?)?,
        EvalOp::Narrow => lhs.narrow(bits("width")?)?,
    };
    Ok(result.to_decimal_string())
}

pub struct EvalCommand {}

impl EvalCommand {
    pub fn new() -> Self {
        EvalCommand {}
    }

    pub fn get_command() -> Command {
        Command::new("eval")
            .about("Evaluate one operation on fixed-width integers")
            .after_help("Operands are decimal or 0x-prefixed hex literals of TYPE. Shift amounts and widen/narrow targets are plain numbers.")
            .arg(arg!(<TYPE> "Operand type, e.g. int8 or uint256"))
            .arg(arg!(<LHS> "Left-hand operand").allow_hyphen_values(true))
            .arg(arg!(<OP> "add, sub, mul, div, rem, shl, shr, and, or, xor, not, neg, cmp, widen, narrow"))
            .arg(arg!([RHS] "Right-hand operand, shift amount or target width").allow_hyphen_values(true))
    }

    pub fn handle_command(&self, sub_matches: &ArgMatches) -> Result<bool, EvalError> {
        let get = |id: &str| sub_matches.get_one::<String>(id).map(String::as_str);
        let result = evaluate(
            get("TYPE").unwrap_or_default(),
            get("LHS").unwrap_or_default(),
            get("OP").unwrap_or_default(),
            get("RHS"),
        )?;
        println!("{result}");
        Ok(true)
    }
}

impl Default for EvalCommand {
    fn default() -> Self {
        Self::new()
    }
}
