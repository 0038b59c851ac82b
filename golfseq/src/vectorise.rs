//! Lifting scalar functions over nested sequences.
use std::{iter, sync::Arc};

use crate::{
    sequence::{Cursor, Sequence},
    value::Value,
};

/// Lift `f`, a function over scalar arguments, to apply element-wise across sequence
/// arguments.
///
/// The lifted function calls `f` directly when none of its arguments is a sequence. Otherwise
/// every scalar argument is broadcast as an infinite repetition of itself, the sequence
/// arguments (lists and strings alike) are walked in lockstep, stopping with the shortest, and
/// the lifted function is re-applied to each row, so nested sequences are traversed
/// recursively. The result is a lazy [`Value::List`].
///
/// ```
/// use golfseq::prelude::*;
///
/// let add = vectorise(|args: &[Value]| args[0].try_add(&args[1]).unwrap_or(Value::Null));
/// let sums = add(&[Value::Int(10), Value::from(vec![Value::Int(1), Value::Int(2)])]);
/// assert_eq!(sums, Value::from(vec![Value::Int(11), Value::Int(12)]));
/// ```
pub fn vectorise<F>(f: F) -> impl Fn(&[Value]) -> Value + Clone + Send + Sync + 'static
where
    F: Fn(&[Value]) -> Value + Send + Sync + 'static,
{
    let f = Arc::new(f);
    move |args: &[Value]| apply(&f, args)
}

fn apply<F>(f: &Arc<F>, args: &[Value]) -> Value
where
    F: Fn(&[Value]) -> Value + Send + Sync + 'static,
{
    if !args.iter().any(Value::is_sequence) {
        return f(args);
    }

    let mut lanes: Vec<Cursor<Value>> = args.iter().map(broadcast).collect();
    let f = Arc::clone(f);
    Value::List(Sequence::new(iter::from_fn(move || {
        let row = lanes
            .iter_mut()
            .map(Iterator::next)
            .collect::<Option<Vec<Value>>>()?;
        Some(apply(&f, &row))
    })))
}

fn broadcast(arg: &Value) -> Cursor<Value> {
    match arg.as_sequence() {
        Some(sequence) => sequence.iter(),
        None => Sequence::repeat(arg.clone(), None).iter(),
    }
}
