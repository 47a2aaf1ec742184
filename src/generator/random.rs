use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::ast::{Ast, CharacterClass, NodeId, NodeKind, Repetition};
use crate::config::GeneratorConfig;
use crate::lexer::Token;
use crate::parser::{parse, ParseError};

/// Characters an unrestricted `.` can turn into
pub const WILDCARD_RANGE: RangeInclusive<char> = 'Z'..='a';

/// Generates random strings matching a parsed pattern
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    ast: Ast,
    config: GeneratorConfig,
}

impl RandomGenerator {
    pub fn new(ast: Ast) -> Self {
        Self {
            ast,
            config: GeneratorConfig::default(),
        }
    }

    /// Parse `pattern` and wrap the result in a generator.
    pub fn create(pattern: &str) -> Result<Self, ParseError> {
        Ok(Self::new(parse(pattern)?))
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Produce one string. The same seed always yields the same string.
    pub fn generate(&self, seed: Option<u64>) -> String {
        self.generate_with(&mut random_source(seed))
    }

    /// Produce one string from a caller-owned random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        Renderer::new(&self.ast, rng, self.config).render_roots()
    }

    /// Produce `count` strings drawn one after another from a single source.
    pub fn samples(&self, count: usize, seed: Option<u64>) -> Vec<String> {
        let mut rng = random_source(seed);
        (0..count).map(|_| self.generate_with(&mut rng)).collect()
    }
}

/// Produce one string for `ast` with the default configuration.
pub fn generate(ast: &Ast, seed: Option<u64>) -> String {
    let mut rng = random_source(seed);
    Renderer::new(ast, &mut rng, GeneratorConfig::default()).render_roots()
}

fn random_source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

struct Renderer<'a, R: Rng + ?Sized> {
    ast: &'a Ast,
    rng: &'a mut R,
    config: GeneratorConfig,
}

impl<'a, R: Rng + ?Sized> Renderer<'a, R> {
    fn new(ast: &'a Ast, rng: &'a mut R, config: GeneratorConfig) -> Self {
        Self { ast, rng, config }
    }

    fn render_roots(&mut self) -> String {
        let mut out = String::new();
        let ast = self.ast;
        for &root in ast.roots() {
            self.render(root, &mut out);
        }
        out
    }

    fn render(&mut self, id: NodeId, out: &mut String) {
        match *self.ast.kind(id) {
            NodeKind::Begin | NodeKind::End => self.render_all(id, out),
            NodeKind::Alternative => self.render_one(id, out),
            NodeKind::Block { is_sub_pattern } => {
                if is_sub_pattern {
                    self.render_all(id, out)
                } else {
                    self.render_one(id, out)
                }
            }
            NodeKind::CharacterClass(class) => out.push(self.pick_char(class)),
            NodeKind::Repetition(repetition) => {
                let count = self.pick_count(repetition);
                log::trace!("{} repeats {} times", id, count);
                for _ in 0..count {
                    self.render_all(id, out);
                }
            }
            NodeKind::Token(token) => self.render_token(id, token, out),
        }
    }

    fn render_all(&mut self, id: NodeId, out: &mut String) {
        let ast = self.ast;
        for &child in ast.children(id) {
            self.render(child, out);
        }
    }

    fn render_one(&mut self, id: NodeId, out: &mut String) {
        let ast = self.ast;
        if let Some(&child) = ast.children(id).choose(&mut *self.rng) {
            log::trace!("{} picked {}", id, child);
            self.render(child, out);
        }
    }

    fn pick_char(&mut self, class: CharacterClass) -> char {
        // Uniform over scalar values, so a range across the surrogate block skips it.
        let (lo, hi) = class.bounds();
        self.rng.gen_range(lo..=hi)
    }

    fn pick_count(&mut self, repetition: Repetition) -> u32 {
        let min = repetition.min();
        let max = repetition
            .max()
            .unwrap_or_else(|| min.saturating_add(self.config.unbounded_extra));
        self.rng.gen_range(min..=max)
    }

    fn render_token(&mut self, id: NodeId, token: Token, out: &mut String) {
        match token {
            Token::Escape(_) => {
                log::warn!("escape {} is not supported and generates nothing", token);
            }
            _ if token.is_wildcard() && self.wildcard_expands(id) => {
                out.push(self.rng.gen_range(WILDCARD_RANGE));
            }
            _ => out.push_str(&token.value()),
        }
    }

    /// A `.` directly inside a set is a literal dot.
    fn wildcard_expands(&self, id: NodeId) -> bool {
        !matches!(
            self.ast.parent(id).map(|parent| *parent.kind()),
            Some(NodeKind::Block {
                is_sub_pattern: false
            })
        )
    }
}
