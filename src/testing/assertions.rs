//! Fluent assertions over generated samples

use regex::Regex;
use std::collections::BTreeSet;
use std::ops::{Range, RangeInclusive};

use crate::ast::Ast;
use crate::config::GeneratorConfig;
use crate::generator::RandomGenerator;

const DEFAULT_SEEDS: Range<u64> = 0..200;

/// Sample `ast` over the default seed range and start an assertion chain.
pub fn assert_generated(ast: &Ast) -> GenerationAssertion {
    GenerationAssertion::new(RandomGenerator::new(ast.clone()), DEFAULT_SEEDS)
}

pub struct GenerationAssertion {
    generator: RandomGenerator,
    seeds: Range<u64>,
    samples: Vec<(u64, String)>,
}

impl GenerationAssertion {
    fn new(generator: RandomGenerator, seeds: Range<u64>) -> Self {
        let samples = seeds
            .clone()
            .map(|seed| (seed, generator.generate(Some(seed))))
            .collect();
        Self {
            generator,
            seeds,
            samples,
        }
    }

    /// Resample with a different generator configuration
    pub fn with_config(self, config: GeneratorConfig) -> Self {
        Self::new(self.generator.with_config(config), self.seeds)
    }

    /// Resample over another seed range
    pub fn seeds(self, seeds: Range<u64>) -> Self {
        Self::new(self.generator, seeds)
    }

    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.samples.iter().map(|(_, sample)| sample.as_str())
    }

    /// Every sample is exactly `expected`
    pub fn always(self, expected: &str) -> Self {
        for (seed, sample) in &self.samples {
            assert_eq!(sample, expected, "seed {seed}");
        }
        self
    }

    /// Every sample matches `pattern` in full
    pub fn all_match(self, pattern: &str) -> Self {
        let anchored = format!("^(?:{pattern})$");
        let re = Regex::new(&anchored)
            .unwrap_or_else(|e| panic!("invalid assertion pattern {pattern:?}: {e}"));
        for (seed, sample) in &self.samples {
            assert!(
                re.is_match(sample),
                "seed {seed}: {sample:?} does not match {pattern:?}"
            );
        }
        self
    }

    pub fn all_satisfy<F>(self, description: &str, predicate: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        for (seed, sample) in &self.samples {
            assert!(
                predicate(sample),
                "seed {seed}: {sample:?} fails: {description}"
            );
        }
        self
    }

    /// Sample lengths, in chars, fall within `range`
    pub fn lengths_within(self, range: RangeInclusive<usize>) -> Self {
        for (seed, sample) in &self.samples {
            let len = sample.chars().count();
            assert!(
                range.contains(&len),
                "seed {seed}: {sample:?} has length {len}, expected {range:?}"
            );
        }
        self
    }

    /// Each of `expected` shows up at least once
    pub fn covers(self, expected: &[&str]) -> Self {
        {
            let seen: BTreeSet<&str> = self.samples().collect();
            for value in expected {
                assert!(
                    seen.contains(value),
                    "{value:?} never generated over seeds {:?}; saw {seen:?}",
                    self.seeds
                );
            }
        }
        self
    }

    /// Resampling with the same seeds gives the same strings
    pub fn is_deterministic(self) -> Self {
        for (seed, sample) in &self.samples {
            assert_eq!(
                &self.generator.generate(Some(*seed)),
                sample,
                "seed {seed} is not reproducible"
            );
        }
        self
    }
}
