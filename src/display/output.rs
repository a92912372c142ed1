use crate::service::{MasterySummary, RankSummary};
use crate::stats::league::NormalizedStats;
use crate::stats::tft::VariantStats;
use crate::stats::MatchSlot;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    result: String,
    champion: String,
    kda: String,
    cs: String,
    damage: String,
    gold: String,
    vision: String,
    duration: String,
    queue: String,
}

#[derive(Tabled)]
struct TftRow {
    #[tabled(rename = "#")]
    number: String,
    placement: String,
    level: String,
    round: String,
    time: String,
    traits: String,
    units: String,
}

#[derive(Tabled)]
struct MasteryRow {
    rank: String,
    champion: String,
    level: String,
    points: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

fn result_label(won: bool) -> String {
    if won {
        "WIN".green().to_string()
    } else {
        "LOSS".red().to_string()
    }
}

fn failed_count<T>(slots: &[MatchSlot<T>]) -> usize {
    slots.iter().filter(|s| !s.is_ok()).count()
}

fn display_failures<T>(slots: &[MatchSlot<T>]) {
    for slot in slots {
        if let MatchSlot::Failed { match_id, error } = slot {
            println!("  {} {}: {}", "⚠️".yellow(), match_id, error);
        }
    }
}

pub fn display_matches(player: &str, slots: &[MatchSlot<NormalizedStats>]) {
    println!("\n{}", format!("📊 MATCHES for {}", player).bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    let mut rows = vec![];
    for (idx, slot) in slots.iter().enumerate() {
        let Some(m) = slot.ok() else { continue };
        rows.push(MatchRow {
            number: format!("{}", idx + 1),
            result: result_label(m.win),
            champion: m.champion.clone(),
            kda: format!("{}/{}/{}", m.kills, m.deaths, m.assists),
            cs: format!("{} ({}/min)", m.cs, m.cs_per_min),
            damage: format!("{} ({}/min)", m.damage, m.damage_per_min),
            gold: format!("{} ({}/min)", m.gold, m.gold_per_min),
            vision: m.vision_score.to_string(),
            duration: m.duration.clone(),
            queue: m.queue.clone(),
        });
    }

    if rows.is_empty() {
        println!("{}", "No matches to show".yellow());
    } else {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    for m in slots.iter().filter_map(MatchSlot::ok) {
        if m.largest_multikill >= 3 {
            println!("  {} {} on {}", "🔥".red(), m.multikill.bold(), m.champion);
        }
    }

    if failed_count(slots) > 0 {
        println!("\n{}", "Skipped".bold().yellow());
        display_failures(slots);
    }
    println!();
}

pub fn display_tft_matches(player: &str, slots: &[MatchSlot<VariantStats>]) {
    println!("\n{}", format!("📊 TFT MATCHES for {}", player).bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    let mut rows = vec![];
    for (idx, slot) in slots.iter().enumerate() {
        let Some(m) = slot.ok() else { continue };
        let placement = if m.win {
            format!("#{}", m.placement).green().to_string()
        } else {
            format!("#{}", m.placement).red().to_string()
        };
        rows.push(TftRow {
            number: format!("{}", idx + 1),
            placement,
            level: m.level.to_string(),
            round: m.round.clone(),
            time: m.time_elim.clone(),
            traits: m
                .traits
                .iter()
                .filter(|t| t.tier > 0)
                .map(|t| format!("{} {}", t.num_units, t.name))
                .collect::<Vec<_>>()
                .join(", "),
            units: m
                .units
                .iter()
                .map(|u| format!("{}{}", u.name, "★".repeat(u.star as usize)))
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    if rows.is_empty() {
        println!("{}", "No matches to show".yellow());
    } else {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    if failed_count(slots) > 0 {
        println!("{}", "Skipped".bold().yellow());
        display_failures(slots);
    }
    println!();
}

pub fn display_rank(player: &str, queue: &str, rank: Option<&RankSummary>) {
    match rank {
        Some(r) => println!(
            "{} {} {} {} {}LP",
            format!("🏆 {} ({})", player, queue).bold().cyan(),
            "→".cyan(),
            r.tier.bold(),
            r.rank.bold(),
            r.league_points
        ),
        None => println!("{}", format!("{} is unranked in {}", player, queue).yellow()),
    }
}

pub fn display_masteries(player: &str, masteries: &[MasterySummary]) {
    println!("\n{}", format!("🎮 Top champions for {}", player).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if masteries.is_empty() {
        println!("{}", "No mastery data available".yellow());
        return;
    }

    let rows: Vec<MasteryRow> = masteries
        .iter()
        .enumerate()
        .map(|(idx, m)| MasteryRow {
            rank: format!("#{}", idx + 1),
            champion: m.champion.clone(),
            level: m.level.to_string(),
            points: m.points.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
