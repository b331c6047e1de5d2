use std::iter::Peekable;

use crate::{
    ast::{AddOperator, Argument, Call, PolyDecl, Program, Statement, Term},
    error::RuntimeError,
    interpreter::{evaluator::input::InputReader, lexer::Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes a parsed program against the literal tail remaining in the
/// token stream.
///
/// The statement list is walked once, in program order; no statement is
/// skipped or reordered. `INPUT` statements pull the next input value into
/// their memory slot, evaluation statements produce one integer each, and
/// the collected results are returned in statement order.
///
/// # Parameters
/// - `program`: The parsed, semantically clean program.
/// - `tokens`: Token iterator positioned at the first literal of the tail.
///
/// # Returns
/// One result per evaluation statement, in program order.
///
/// # Errors
/// Returns a `RuntimeError` if the tail cannot supply a demanded value,
/// holds a non-literal token, or an evaluation overflows.
pub fn execute<'a, I>(program: &Program, tokens: &mut Peekable<I>) -> EvalResult<Vec<i64>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut reader = InputReader::new(program.decls.len());
    reader.prime(tokens)?;

    let mut memory = vec![0_i64; program.slot_count];
    let mut results = Vec::new();

    for statement in &program.statements {
        match statement {
            Statement::Input { slot, line } => {
                memory[*slot] = reader.next_value(tokens, *line)?;
            },
            Statement::Eval { call, .. } => {
                results.push(evaluate_call(&program.decls, &memory, call)?);
            },
        }
    }

    Ok(results)
}

/// Evaluates a polynomial call to a single integer.
///
/// Argument values are resolved in order — constants directly, variables
/// from memory, nested calls recursively — then bound positionally to the
/// declaration's parameters, and the body is evaluated over them. A nested
/// call contributes its full signed sum, exactly as a top-level evaluation
/// of the same call would.
///
/// # Errors
/// Returns a `RuntimeError` if a name or slot is unresolved or the
/// arithmetic overflows.
pub fn evaluate_call(decls: &[PolyDecl], memory: &[i64], call: &Call) -> EvalResult<i64> {
    let decl = decls.iter()
                    .find(|decl| decl.header.name == call.name)
                    .ok_or_else(|| RuntimeError::UnknownPolynomial { name: call.name.clone(),
                                                                     line: call.line, })?;

    let mut values = Vec::with_capacity(call.arguments.len());
    for argument in &call.arguments {
        values.push(match argument {
            Argument::Constant { value } => *value,
            Argument::Variable { slot } => {
                let slot = slot.ok_or(RuntimeError::UnboundVariable { line: call.line })?;
                memory.get(slot)
                      .copied()
                      .ok_or(RuntimeError::UnboundVariable { line: call.line })?
            },
            Argument::Nested { call } => evaluate_call(decls, memory, call)?,
        });
    }

    evaluate_body(&decl.body, &values, call.line)
}

/// Evaluates a polynomial body against bound parameter values.
///
/// Each term contributes `coefficient × Π value^exponent` over its
/// monomials; the `+`/`-` connector written before a term decides whether
/// the contribution is added or subtracted.
fn evaluate_body(terms: &[Term], values: &[i64], line: usize) -> EvalResult<i64> {
    let mut sum = 0_i64;
    for term in terms {
        let value = evaluate_term(term, values, line)?;
        sum = match term.sign {
                  AddOperator::Plus => sum.checked_add(value),
                  AddOperator::Minus => sum.checked_sub(value),
              }.ok_or(RuntimeError::Overflow { line })?;
    }

    Ok(sum)
}

/// Evaluates one term as the product of its coefficient and parameter
/// powers.
fn evaluate_term(term: &Term, values: &[i64], line: usize) -> EvalResult<i64> {
    let mut product = term.coefficient;
    for monomial in &term.monomials {
        let param = monomial.param.ok_or(RuntimeError::UnboundParameter { line })?;
        let value = values.get(param)
                          .copied()
                          .ok_or(RuntimeError::UnboundParameter { line })?;
        let power = value.checked_pow(monomial.exponent)
                         .ok_or(RuntimeError::Overflow { line })?;
        product = product.checked_mul(power)
                         .ok_or(RuntimeError::Overflow { line })?;
    }

    Ok(product)
}
