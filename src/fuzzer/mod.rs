//! The opaque `Fuzzer<A>` abstraction and its combinator surface
//! (spec.md §4.2).

pub mod char;
pub mod composite;
pub mod float;
pub mod frequency;
pub mod int;
pub mod list;
pub mod string;

use std::rc::Rc;

use crate::prng::Prng;
use crate::result::GenResult;
use crate::source::Distribution;

/// A reproducible generator of values of type `A`: a pure function from a
/// `Prng` to a `GenResult<A>`. Equal under extensional behavior; no
/// identity is exposed.
pub struct Fuzzer<A> {
    run: Rc<dyn Fn(Prng) -> GenResult<A>>,
}

impl<A> Clone for Fuzzer<A> {
    fn clone(&self) -> Self {
        Fuzzer {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A: 'static> Fuzzer<A> {
    pub fn new(run: impl Fn(Prng) -> GenResult<A> + 'static) -> Self {
        Fuzzer { run: Rc::new(run) }
    }

    pub fn run(&self, prng: Prng) -> GenResult<A> {
        (self.run)(prng)
    }

    /// Consumes no choices; always returns `x`.
    pub fn constant(x: A) -> Self
    where
        A: Clone,
    {
        Fuzzer::new(move |prng| GenResult::Generated {
            value: x.clone(),
            prng,
        })
    }

    /// Always rejected with `reason`; never writes to the choice sequence.
    pub fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Fuzzer::new(move |prng| GenResult::Rejected {
            reason: reason.clone(),
            prng,
        })
    }

    pub fn map<B: 'static>(&self, f: impl Fn(A) -> B + 'static) -> Fuzzer<B> {
        let this = self.clone();
        Fuzzer::new(move |prng| this.run(prng).map(&f))
    }

    pub fn map2<B: 'static, C: 'static>(
        &self,
        other: &Fuzzer<B>,
        f: impl Fn(A, B) -> C + 'static,
    ) -> Fuzzer<C> {
        let this = self.clone();
        let other = other.clone();
        Fuzzer::new(move |prng| match this.run(prng) {
            GenResult::Generated { value: a, prng } => match other.run(prng) {
                GenResult::Generated { value: b, prng } => GenResult::Generated {
                    value: f(a, b),
                    prng,
                },
                GenResult::Rejected { reason, prng } => GenResult::Rejected { reason, prng },
            },
            GenResult::Rejected { reason, prng } => GenResult::Rejected { reason, prng },
        })
    }

    pub fn map3<B: 'static, C: 'static, D: 'static>(
        &self,
        b: &Fuzzer<B>,
        c: &Fuzzer<C>,
        f: impl Fn(A, B, C) -> D + 'static,
    ) -> Fuzzer<D> {
        let bc = b.map2(c, |b, c| (b, c));
        self.map2(&bc, move |a, (b, c)| f(a, b, c))
    }

    pub fn map4<B: 'static, C: 'static, D: 'static, E: 'static>(
        &self,
        b: &Fuzzer<B>,
        c: &Fuzzer<C>,
        d: &Fuzzer<D>,
        f: impl Fn(A, B, C, D) -> E + 'static,
    ) -> Fuzzer<E> {
        let bcd = b.map3(c, d, |b, c, d| (b, c, d));
        self.map2(&bcd, move |a, (b, c, d)| f(a, b, c, d))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn map5<B: 'static, C: 'static, D: 'static, E: 'static, F: 'static>(
        &self,
        b: &Fuzzer<B>,
        c: &Fuzzer<C>,
        d: &Fuzzer<D>,
        e: &Fuzzer<E>,
        f: impl Fn(A, B, C, D, E) -> F + 'static,
    ) -> Fuzzer<F> {
        let bcde = b.map4(c, d, e, |b, c, d, e| (b, c, d, e));
        self.map2(&bcde, move |a, (b, c, d, e)| f(a, b, c, d, e))
    }

    /// Applicative application: `self` yields a function, `arg` yields its
    /// argument.
    pub fn and_map<B: 'static, C: 'static>(&self, arg: &Fuzzer<B>) -> Fuzzer<C>
    where
        A: FnOnce(B) -> C + 'static,
    {
        self.map2(arg, |f, b| f(b))
    }

    /// Generates `a` from `self`, then runs `f(a)` with the resulting
    /// `Prng` — the choices `f(a)` makes immediately follow `self`'s.
    pub fn and_then<B: 'static>(&self, f: impl Fn(A) -> Fuzzer<B> + 'static) -> Fuzzer<B> {
        let this = self.clone();
        Fuzzer::new(move |prng| match this.run(prng) {
            GenResult::Generated { value, prng } => f(value).run(prng),
            GenResult::Rejected { reason, prng } => GenResult::Rejected { reason, prng },
        })
    }

    /// Retries up to 15 times if `pred` fails; the 16th failure rejects
    /// with "too many filtered". Prefer narrowing the domain with `map`
    /// over filtering when possible.
    pub fn filter(&self, pred: impl Fn(&A) -> bool + 'static) -> Self {
        const MAX_ATTEMPTS: u32 = 16;
        let this = self.clone();
        Fuzzer::new(move |prng| {
            let mut prng = prng;
            for attempt in 0..MAX_ATTEMPTS {
                match this.run(prng) {
                    GenResult::Generated { value, prng: next } => {
                        if pred(&value) {
                            return GenResult::Generated { value, prng: next };
                        }
                        prng = next;
                    }
                    GenResult::Rejected { reason, prng: next } => {
                        return GenResult::Rejected { reason, prng: next };
                    }
                }
                if attempt + 1 == MAX_ATTEMPTS {
                    log::trace!("filter: exhausted {MAX_ATTEMPTS} attempts");
                }
            }
            GenResult::Rejected {
                reason: "too many filtered".to_string(),
                prng,
            }
        })
    }
}

/// Draws one integer uniformly into the choice sequence. The sole source
/// of randomness for plain integer draws; every other value-producing
/// fuzzer decomposes into calls to this one (or, for weighted draws, to
/// `Prng::roll_dice` directly with `Distribution::Weighted`).
pub fn roll_dice(max_value: u32) -> Fuzzer<u32> {
    Fuzzer::new(move |prng| prng.roll_dice(max_value, Distribution::Uniform))
}

/// Writes exactly `n` with no randomness.
pub fn forced_choice(n: u32) -> Fuzzer<u32> {
    Fuzzer::new(move |prng| prng.forced_choice(n))
}
