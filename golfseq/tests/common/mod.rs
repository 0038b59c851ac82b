#![allow(dead_code)]

use std::{
    iter,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use golfseq::prelude::*;

/// Flag raised once a producer is pulled past a given point.
#[derive(Clone, Default)]
pub struct Probe(Arc<AtomicBool>);

impl Probe {
    pub fn fired(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Sequence yielding `head`, raising the probe when asked for the element after it, then
/// yielding `tail`.
pub fn probed<T: Element>(head: Vec<T>, tail: Vec<T>) -> (Sequence<T>, Probe) {
    let probe = Probe::default();
    let flag = probe.clone();
    let marker = iter::from_fn(move || {
        flag.0.store(true, Ordering::SeqCst);
        None
    });
    (Sequence::new(head.into_iter().chain(marker).chain(tail)), probe)
}

/// Lazy character string raising the probe once `text` has been fully read.
pub fn probed_text(text: &str) -> (GolfString, Probe) {
    probed(text.chars().map(Character::from).collect(), Vec::new())
}

pub fn text(text: &str) -> GolfString {
    GolfString::from_text(text)
}

/// Texts of a sequence of strings, for readable assertions.
pub fn texts(strings: &Sequence<GolfString>) -> Vec<String> {
    strings.iter().map(|string| string.to_text()).collect()
}
