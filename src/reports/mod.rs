use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use nback::generator::CategoryCounts;
use nback::history::HistoryEntry;
use nback::session::TaskMode;
use nback::types::{CategoryResult, RoundScore, Trial};

fn match_label(sequence: &[Trial], n: usize, i: usize) -> &'static str {
    if i < n {
        return "filler";
    }
    let back = &sequence[i - n];
    let vis = sequence[i].position == back.position;
    let aud = sequence[i].letter == back.letter;
    match (vis, aud) {
        (true, true) => "DUAL",
        (true, false) => "visual",
        (false, true) => "auditory",
        (false, false) => "",
    }
}

pub fn print_sequence(sequence: &[Trial], n: usize) {
    println!("\nSequence: {}-back, {} trials", n, sequence.len());
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Pos"),
        Cell::new("Cell"),
        Cell::new("Letter"),
        Cell::new("Match").fg(Color::Cyan),
    ]);

    for (i, trial) in sequence.iter().enumerate() {
        table.add_row(vec![
            Cell::new(trial.index).set_alignment(CellAlignment::Right),
            Cell::new(trial.position).set_alignment(CellAlignment::Center),
            Cell::new(trial.position_label()),
            Cell::new(trial.letter).set_alignment(CellAlignment::Center),
            Cell::new(match_label(sequence, n, i)),
        ]);
    }
    println!("{}", table);
}

pub fn print_category_counts(counts: &CategoryCounts) {
    println!(
        "Counts: dual {} | visual-only {} | auditory-only {} | none {}",
        counts.dual, counts.visual_only, counts.auditory_only, counts.none
    );
}

fn score_row(name: &str, result: &CategoryResult, color: Color) -> Vec<Cell> {
    vec![
        Cell::new(name).fg(color),
        Cell::new(result.hits).set_alignment(CellAlignment::Right),
        Cell::new(result.total).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1}%", result.pct)).set_alignment(CellAlignment::Right),
    ]
}

pub fn print_round_score(round: usize, n: usize, mode: TaskMode, score: &RoundScore) {
    println!("\n=== Round {} | {}-back | {} ===", round, n, mode);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Hits"),
        Cell::new("Total"),
        Cell::new("Accuracy"),
    ]);
    table.add_row(score_row("Visual", &score.visual, Color::Blue));
    table.add_row(score_row("Auditory", &score.auditory, Color::Magenta));
    table.add_row(score_row("Dual", &score.dual, Color::Green));
    println!("{}", table);
    println!("Accuracy ({}): {:.1}%", mode, mode.accuracy(score));
}

pub fn print_history(entries: &[HistoryEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("When").add_attribute(Attribute::Bold),
        Cell::new("Level"),
        Cell::new("Mode"),
        Cell::new("Accuracy"),
    ]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.timestamp.format("%Y-%m-%d %H:%M")),
            Cell::new(entry.level).set_alignment(CellAlignment::Right),
            Cell::new(entry.mode),
            Cell::new(format!("{:.1}%", entry.accuracy)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}
