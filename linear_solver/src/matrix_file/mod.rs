use crate::error::{Result, SolverError};
use crate::linear_system::{Row, Solution, System};
use crate::scalar::Scalar;

const SEPARATOR: &str = "|";
// largest augmented matrix a header may declare, in terms
const MAX_TERMS: usize = 1 << 24;

pub fn parse_system(text: &str) -> Result<System> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let header = lines
        .next()
        .ok_or_else(|| SolverError::InvalidInput("missing header line".to_owned()))?;
    let (variable_count, equation_count) = parse_header(header)?;

    let mut rows = Vec::new();
    for line in lines {
        if rows.len() == equation_count {
            return Err(SolverError::InvalidInput(format!(
                "more than {equation_count} equations"
            )));
        }
        rows.push(parse_equation(variable_count, line)?);
    }
    if rows.len() < equation_count {
        log::warn!(
            "only {} of {equation_count} equations present, the rest are 0 = 0",
            rows.len()
        );
        rows.resize_with(equation_count, || Row::zero(variable_count));
    }
    System::new(variable_count, rows)
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let counts = line
        .split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| {
                SolverError::InvalidInput(format!("bad count {token:?} in header {line:?}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let (variable_count, equation_count) = match counts[..] {
        [variables] => (variables, variables),
        [variables, equations] => (variables, equations),
        _ => {
            return Err(SolverError::InvalidInput(format!(
                "header must be `V` or `V E`, got {line:?}"
            )))
        }
    };
    if variable_count < 1 {
        return Err(SolverError::InvalidInput(
            "variable count must be at least 1".to_owned(),
        ));
    }
    let terms = variable_count
        .checked_add(1)
        .and_then(|width| width.checked_mul(equation_count.max(1)));
    if !matches!(terms, Some(terms) if terms <= MAX_TERMS) {
        return Err(SolverError::InvalidInput(format!(
            "header {line:?} declares more than {MAX_TERMS} terms"
        )));
    }
    Ok((variable_count, equation_count))
}

fn parse_equation(variable_count: usize, line: &str) -> Result<Row> {
    let terms = line
        .split_whitespace()
        .filter(|token| *token != SEPARATOR)
        .map(str::parse::<Scalar>)
        .collect::<Result<Vec<_>>>()?;
    Row::from_terms(variable_count, terms).map_err(|err| match err {
        SolverError::DimensionMismatch { expected, .. } => SolverError::InvalidInput(format!(
            "equation {line:?} has more than {expected} terms"
        )),
        err => err,
    })
}

pub fn render_solution(solution: &Solution) -> String {
    format!("{solution}\n")
}
