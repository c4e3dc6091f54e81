//! Text and JSON rendering of deck statistics and test hands.
//!
//! The text renderers write into any [`fmt::Write`] so callers can target a
//! `String` or a formatter and see write failures through `?`.

use crate::deck::{Category, Deck, PartitionTargets};
use crate::probability::{DeckProbabilities, NextCardOdds};
use crate::simulation::{HandAnalysis, NextCard, SampleSummary};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{self, Write};

const RULE: usize = 50;

fn pct(p: f64) -> f64 {
    p * 100.0
}

/// Deck list with the card ID behind each name when one is known
pub fn write_deck_list<W: Write>(
    out: &mut W,
    deck: &Deck,
    card_ids: &HashMap<String, u32>,
) -> fmt::Result {
    writeln!(out, "DECK LIST")?;
    writeln!(out, "{:-<RULE$}", "")?;
    for (i, (name, copies)) in deck.cards().enumerate() {
        match card_ids.get(name) {
            Some(id) => writeln!(out, "  {:2}. {}x {} ({})", i + 1, copies, name, id)?,
            None => writeln!(out, "  {:2}. {}x {}", i + 1, copies, name)?,
        }
    }
    writeln!(out, "{:-<RULE$}", "")?;
    writeln!(out, "Total: {} cards", deck.deck_size())
}

/// Engine x non-engine grid; absent and zero cells print as `-`
pub fn write_matrix<W: Write>(out: &mut W, probs: &DeckProbabilities) -> fmt::Result {
    let span = probs.joint.span();

    write!(out, "       ")?;
    for ne in 0..=span {
        write!(out, " {}NE   ", ne)?;
    }
    writeln!(out)?;

    for e in 0..=span {
        write!(out, "  {}E  ", e)?;
        for ne in 0..=span {
            match probs.joint.get(e, ne) {
                Some(p) if p > 0.0 => write!(out, "{:5.1}% ", pct(p))?,
                _ => write!(out, "   -  ")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_probabilities<W: Write>(out: &mut W, probs: &DeckProbabilities) -> fmt::Result {
    writeln!(out, "OPENING HAND PROBABILITIES")?;
    writeln!(out, "{:=<RULE$}\n", "")?;
    writeln!(out, "Deck: {} cards (hand of {})", probs.deck_size, probs.hand_size)?;
    writeln!(
        out,
        "  Engine: {} | Non-Engine: {} | Bricks: {}\n",
        probs.engine.total, probs.non_engine.total, probs.brick.total
    )?;

    writeln!(out, "Engine x Non-Engine Matrix:")?;
    writeln!(out, "(E = Engine, NE = Non-Engine/Handtraps)\n")?;
    write_matrix(out, probs)?;

    writeln!(out, "\n{:-<RULE$}", "")?;
    writeln!(out, "'At Least' Probabilities:")?;
    writeln!(out, "(Chance of drawing X OR MORE)\n")?;
    for category in Category::ALL {
        let stats = probs.category(category);
        for k in [1, 2] {
            let label = format!("At least {} {}:", k, category);
            writeln!(out, "  {:<24}{:5.1}%", label, pct(stats.at_least(k)))?;
        }
    }

    writeln!(out, "\n'Exact' Probabilities:")?;
    writeln!(out, "(Chance of drawing EXACTLY X)\n")?;
    for category in [Category::Engine, Category::Brick] {
        let stats = probs.category(category);
        for k in 0..=2 {
            let label = format!("Exactly {} {}:", k, category);
            writeln!(out, "  {:<24}{:5.1}%", label, pct(stats.exactly(k)))?;
        }
    }

    let risk = probs.brick_risk;
    writeln!(out, "\n{:-<RULE$}", "")?;
    writeln!(out, "BRICK ANALYSIS\n")?;
    writeln!(
        out,
        "  Open with brick ({} cards):     {:5.1}%",
        probs.hand_size,
        pct(risk.opening)
    )?;
    writeln!(out, "  Draw brick next (if none open): {:5.1}%", pct(risk.next_draw))?;
    writeln!(
        out,
        "  See brick by next draw ({} cards): {:5.1}%",
        probs.hand_size.saturating_add(1),
        pct(risk.by_next_draw)
    )
}

pub fn write_hand<W: Write>(
    out: &mut W,
    hand: &[String],
    analysis: &HandAnalysis,
    next: Option<&NextCard>,
    odds: &NextCardOdds,
) -> fmt::Result {
    writeln!(out, "TEST HAND")?;
    writeln!(out, "{:=<RULE$}\n", "")?;
    for (i, card) in hand.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, card)?;
    }
    writeln!(
        out,
        "\n  Engine: {} | Non-Engine: {} | Bricks: {} | Other: {}",
        analysis.engine, analysis.non_engine, analysis.brick, analysis.uncategorized
    )?;

    writeln!(out, "\n{:-<RULE$}", "")?;
    writeln!(out, "NEXT CARD (GOING SECOND)\n")?;
    match next {
        Some(card) => {
            let category = card
                .category
                .map(|c| c.to_string().to_uppercase())
                .unwrap_or_else(|| "UNCATEGORIZED".to_string());
            writeln!(out, "  Simulated draw: {} [{}]\n", card.name, category)?;
        }
        None => writeln!(out, "  No cards left\n")?,
    }
    for category in Category::ALL {
        let label = format!("{}:", category);
        writeln!(
            out,
            "  {:<13}{:5.1}% ({}/{} remaining)",
            label,
            pct(odds.probability(category)),
            odds.remaining(category),
            odds.remaining_deck
        )?;
    }
    Ok(())
}

/// Empirical rates next to the exact figures
pub fn write_sample_comparison<W: Write>(
    out: &mut W,
    summary: &SampleSummary,
    probs: &DeckProbabilities,
) -> fmt::Result {
    writeln!(out, "SAMPLED vs EXACT ({} hands)", summary.trials)?;
    writeln!(out, "{:=<RULE$}\n", "")?;
    writeln!(out, "{:24} {:>10} {:>10}", "", "sampled", "exact")?;
    for category in Category::ALL {
        let stats = probs.category(category);
        for k in [1, 2] {
            let label = format!("At least {} {}", k, category);
            writeln!(
                out,
                "{:24} {:>9.2}% {:>9.2}%",
                label,
                pct(summary.at_least_rate(category, k)),
                pct(stats.at_least(k))
            )?;
        }
    }
    Ok(())
}

/// Everything `stats --json` prints
#[derive(Debug, Serialize)]
pub struct ProbabilityReport<'a> {
    pub generated_at: String,
    pub seed: u64,
    pub targets: PartitionTargets,
    pub probabilities: &'a DeckProbabilities,
    pub hand: &'a [String],
    pub hand_analysis: HandAnalysis,
    pub next_card: Option<&'a NextCard>,
    pub next_card_odds: NextCardOdds,
}

impl<'a> ProbabilityReport<'a> {
    pub fn new(
        seed: u64,
        targets: PartitionTargets,
        probabilities: &'a DeckProbabilities,
        hand: &'a [String],
        hand_analysis: HandAnalysis,
        next_card: Option<&'a NextCard>,
        next_card_odds: NextCardOdds,
    ) -> Self {
        ProbabilityReport {
            generated_at: chrono::Local::now().to_rfc3339(),
            seed,
            targets,
            probabilities,
            hand,
            hand_analysis,
            next_card,
            next_card_odds,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
