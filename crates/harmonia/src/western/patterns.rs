//! Chart patterns: configurations in the sign placements and the aspect graph.
//!
//! Every detector is total and independent. Detectors may fire together
//! (a Kite always contains a Grand Trine) and each reports a given
//! participant set at most once.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::aspects::types::{Aspect, AspectKind};
use crate::western::signs::{Element, Sign, SIGNS};
use crate::western::types::ChartBody;

const STELLIUM_MIN_BODIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Stellium,
    GrandTrine,
    TSquare,
    GrandCross,
    Yod,
    Kite,
    MysticRectangle,
}

impl PatternKind {
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Stellium => "Stellium",
            PatternKind::GrandTrine => "Grand Trine",
            PatternKind::TSquare => "T-Square",
            PatternKind::GrandCross => "Grand Cross",
            PatternKind::Yod => "Yod",
            PatternKind::Kite => "Kite",
            PatternKind::MysticRectangle => "Mystic Rectangle",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub kind: PatternKind,
    pub participants: BTreeSet<String>,
    /// Sign holding a stellium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
    /// Element shared by all members of a grand trine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
    /// Focal body (T-Square, Yod) or the trine vertex opposed in a Kite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apex: Option<String>,
}

impl Pattern {
    fn new<'a>(kind: PatternKind, participants: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            kind,
            participants: participants.into_iter().map(str::to_string).collect(),
            sign: None,
            element: None,
            apex: None,
        }
    }

    fn with_apex(mut self, apex: &str) -> Self {
        self.apex = Some(apex.to_string());
        self
    }

    /// Presentation label, e.g. "Grand Trine (Fire)" or "T-Square (apex: Mars)"
    pub fn label(&self) -> String {
        let names = self.participants.iter().cloned().collect::<Vec<_>>().join(", ");
        match (self.kind, &self.sign, &self.element, &self.apex) {
            (PatternKind::Stellium, Some(sign), _, _) => format!("Stellium in {sign} ({names})"),
            (PatternKind::GrandTrine, _, Some(element), _) => format!("Grand Trine ({element})"),
            (PatternKind::Kite, _, _, Some(apex)) => format!("Kite (head: {apex})"),
            (kind, _, _, Some(apex)) => format!("{kind} (apex: {apex})"),
            (kind, _, _, None) => format!("{kind} ({names})"),
        }
    }
}

/// Undirected aspect graph keyed by body-name pairs
struct AspectGraph<'a> {
    edges: BTreeMap<(&'a str, &'a str), AspectKind>,
}

impl<'a> AspectGraph<'a> {
    fn new(aspects: &'a [Aspect]) -> Self {
        let edges = aspects
            .iter()
            .map(|a| (Self::key(&a.body_a, &a.body_b), a.kind))
            .collect();
        Self { edges }
    }

    fn key<'b>(a: &'b str, b: &'b str) -> (&'b str, &'b str) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    fn kind(&self, a: &str, b: &str) -> Option<AspectKind> {
        self.edges.get(&Self::key(a, b)).copied()
    }

    fn has(&self, a: &str, b: &str, kind: AspectKind) -> bool {
        self.kind(a, b) == Some(kind)
    }

    fn edges_of(&self, kind: AspectKind) -> Vec<(&'a str, &'a str)> {
        self.edges
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(pair, _)| *pair)
            .collect()
    }

    /// Pairs of disjoint edges of one kind
    fn disjoint_pairs(&self, kind: AspectKind) -> Vec<[&'a str; 4]> {
        let edges = self.edges_of(kind);
        let mut out = Vec::new();
        for (i, &(a, b)) in edges.iter().enumerate() {
            for &(c, d) in &edges[i + 1..] {
                if a != c && a != d && b != c && b != d {
                    out.push([a, b, c, d]);
                }
            }
        }
        out
    }
}

/// Appends a pattern unless one of the same kind already covers its participants
fn push_unique(patterns: &mut Vec<Pattern>, pattern: Pattern) {
    if !patterns
        .iter()
        .any(|p| p.kind == pattern.kind && p.participants == pattern.participants)
    {
        patterns.push(pattern);
    }
}

fn names(bodies: &[ChartBody]) -> Vec<&str> {
    bodies.iter().map(|b| b.name.as_str()).collect()
}

/// Three or more bodies in one sign
pub fn detect_stelliums(bodies: &[ChartBody]) -> Vec<Pattern> {
    SIGNS
        .iter()
        .filter_map(|&sign| {
            let members: Vec<&str> = bodies
                .iter()
                .filter(|b| b.sign == sign)
                .map(|b| b.name.as_str())
                .collect();
            (members.len() >= STELLIUM_MIN_BODIES).then(|| {
                let mut pattern = Pattern::new(PatternKind::Stellium, members);
                pattern.sign = Some(sign);
                pattern
            })
        })
        .collect()
}

fn grand_trine_triples<'a>(bodies: &'a [ChartBody], graph: &AspectGraph<'_>) -> Vec<[&'a str; 3]> {
    let names = names(bodies);
    let mut triples = Vec::new();
    for i in 0..names.len() {
        for j in i + 1..names.len() {
            if !graph.has(names[i], names[j], AspectKind::Trine) {
                continue;
            }
            for k in j + 1..names.len() {
                if graph.has(names[i], names[k], AspectKind::Trine)
                    && graph.has(names[j], names[k], AspectKind::Trine)
                {
                    triples.push([names[i], names[j], names[k]]);
                }
            }
        }
    }
    triples
}

/// Three bodies mutually in trine
pub fn detect_grand_trines(bodies: &[ChartBody], aspects: &[Aspect]) -> Vec<Pattern> {
    let graph = AspectGraph::new(aspects);
    let mut patterns = Vec::new();
    for triple in grand_trine_triples(bodies, &graph) {
        let elements: BTreeSet<Element> = bodies
            .iter()
            .filter(|b| triple.contains(&b.name.as_str()))
            .map(|b| b.sign.element())
            .collect();
        let mut pattern = Pattern::new(PatternKind::GrandTrine, triple);
        if elements.len() == 1 {
            pattern.element = elements.into_iter().next();
        }
        push_unique(&mut patterns, pattern);
    }
    patterns
}

/// An opposition whose ends are both square a third body
pub fn detect_t_squares(bodies: &[ChartBody], aspects: &[Aspect]) -> Vec<Pattern> {
    let graph = AspectGraph::new(aspects);
    let mut patterns = Vec::new();
    for (a, b) in graph.edges_of(AspectKind::Opposition) {
        for apex in names(bodies) {
            if apex != a
                && apex != b
                && graph.has(a, apex, AspectKind::Square)
                && graph.has(b, apex, AspectKind::Square)
            {
                push_unique(
                    &mut patterns,
                    Pattern::new(PatternKind::TSquare, [a, b, apex]).with_apex(apex),
                );
            }
        }
    }
    patterns
}

/// Two oppositions whose four ends are joined by squares
pub fn detect_grand_crosses(aspects: &[Aspect]) -> Vec<Pattern> {
    let graph = AspectGraph::new(aspects);
    let mut patterns = Vec::new();
    for [a, b, c, d] in graph.disjoint_pairs(AspectKind::Opposition) {
        let squares = [(a, c), (a, d), (b, c), (b, d)]
            .iter()
            .all(|&(x, y)| graph.has(x, y, AspectKind::Square));
        if squares {
            push_unique(&mut patterns, Pattern::new(PatternKind::GrandCross, [a, b, c, d]));
        }
    }
    patterns
}

/// Two quincunxes from one apex whose other ends are sextile
pub fn detect_yods(bodies: &[ChartBody], aspects: &[Aspect]) -> Vec<Pattern> {
    let graph = AspectGraph::new(aspects);
    let names = names(bodies);
    let mut patterns = Vec::new();
    for &apex in &names {
        let arms: Vec<&str> = names
            .iter()
            .copied()
            .filter(|&other| graph.has(apex, other, AspectKind::Quincunx))
            .collect();
        for (i, &x) in arms.iter().enumerate() {
            for &y in &arms[i + 1..] {
                if graph.has(x, y, AspectKind::Sextile) {
                    push_unique(
                        &mut patterns,
                        Pattern::new(PatternKind::Yod, [apex, x, y]).with_apex(apex),
                    );
                }
            }
        }
    }
    patterns
}

/// A grand trine with one vertex opposed by a fourth body
pub fn detect_kites(bodies: &[ChartBody], aspects: &[Aspect]) -> Vec<Pattern> {
    let graph = AspectGraph::new(aspects);
    let all = names(bodies);
    let mut patterns = Vec::new();
    for triple in grand_trine_triples(bodies, &graph) {
        for &vertex in &triple {
            for &fourth in &all {
                if !triple.contains(&fourth) && graph.has(vertex, fourth, AspectKind::Opposition) {
                    let members = [triple[0], triple[1], triple[2], fourth];
                    push_unique(
                        &mut patterns,
                        Pattern::new(PatternKind::Kite, members).with_apex(vertex),
                    );
                }
            }
        }
    }
    patterns
}

/// Two oppositions whose ends carry two sextiles and two trines
pub fn detect_mystic_rectangles(aspects: &[Aspect]) -> Vec<Pattern> {
    let graph = AspectGraph::new(aspects);
    let mut patterns = Vec::new();
    for [a, b, c, d] in graph.disjoint_pairs(AspectKind::Opposition) {
        let sides: Vec<Option<AspectKind>> = [(a, c), (a, d), (b, c), (b, d)]
            .iter()
            .map(|&(x, y)| graph.kind(x, y))
            .collect();
        let count = |kind| sides.iter().filter(|k| **k == Some(kind)).count();
        if count(AspectKind::Sextile) == 2 && count(AspectKind::Trine) == 2 {
            push_unique(
                &mut patterns,
                Pattern::new(PatternKind::MysticRectangle, [a, b, c, d]),
            );
        }
    }
    patterns
}

/// Runs every detector, in a fixed order.
pub fn detect_patterns(bodies: &[ChartBody], aspects: &[Aspect]) -> Vec<Pattern> {
    let mut patterns = detect_stelliums(bodies);
    patterns.extend(detect_grand_trines(bodies, aspects));
    patterns.extend(detect_t_squares(bodies, aspects));
    patterns.extend(detect_grand_crosses(aspects));
    patterns.extend(detect_yods(bodies, aspects));
    patterns.extend(detect_kites(bodies, aspects));
    patterns.extend(detect_mystic_rectangles(aspects));
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::AspectCalculator;

    fn chart(placements: &[(&str, f64)]) -> (Vec<ChartBody>, Vec<Aspect>) {
        let bodies: Vec<ChartBody> = placements
            .iter()
            .map(|&(name, lon)| ChartBody::new(name, lon))
            .collect();
        let aspects = AspectCalculator::default().compute_aspects(&bodies);
        (bodies, aspects)
    }

    #[test]
    fn test_empty_input() {
        assert!(detect_patterns(&[], &[]).is_empty());
    }

    #[test]
    fn test_stellium_label() {
        let (bodies, _) = chart(&[("Sun", 125.0), ("Mercury", 130.0), ("Venus", 140.0)]);
        let stelliums = detect_stelliums(&bodies);
        assert_eq!(stelliums.len(), 1);
        assert_eq!(stelliums[0].label(), "Stellium in Leo (Mercury, Sun, Venus)");
    }

    #[test]
    fn test_t_square() {
        let (bodies, aspects) = chart(&[("Venus", 10.0), ("Saturn", 190.0), ("Mars", 100.0)]);
        let found = detect_t_squares(&bodies, &aspects);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].label(), "T-Square (apex: Mars)");
    }

    #[test]
    fn test_grand_cross_implies_t_squares() {
        let (bodies, aspects) = chart(&[
            ("Mercury", 0.0),
            ("Venus", 90.0),
            ("Mars", 180.0),
            ("Jupiter", 270.0),
        ]);
        assert_eq!(detect_grand_crosses(&aspects).len(), 1);
        assert_eq!(detect_t_squares(&bodies, &aspects).len(), 4);
    }

    #[test]
    fn test_yod() {
        let (bodies, aspects) = chart(&[("Mercury", 0.0), ("Venus", 60.0), ("Mars", 210.0)]);
        let yods = detect_yods(&bodies, &aspects);
        assert_eq!(yods.len(), 1);
        assert_eq!(yods[0].apex.as_deref(), Some("Mars"));
    }

    #[test]
    fn test_kite() {
        let (bodies, aspects) = chart(&[
            ("Mercury", 5.0),
            ("Venus", 125.0),
            ("Mars", 245.0),
            ("Jupiter", 185.0),
        ]);
        let kites = detect_kites(&bodies, &aspects);
        assert_eq!(kites.len(), 1);
        assert_eq!(kites[0].apex.as_deref(), Some("Mercury"));
        assert_eq!(kites[0].participants.len(), 4);
    }

    #[test]
    fn test_mystic_rectangle() {
        let (_, aspects) = chart(&[
            ("Mercury", 0.0),
            ("Venus", 60.0),
            ("Mars", 180.0),
            ("Jupiter", 240.0),
        ]);
        assert_eq!(detect_mystic_rectangles(&aspects).len(), 1);
        assert!(detect_grand_crosses(&aspects).is_empty());
    }
}
