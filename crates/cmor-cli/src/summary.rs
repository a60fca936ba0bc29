use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cmor_model::{DetectionMethod, Diagnostic, MappingResult};
use cmor_standards::CandidateCatalog;

use crate::commands::MapReport;

pub fn print_map_report(report: &MapReport) {
    let result = report.result();
    println!("Dataset: {}", report.dataset.display());
    println!(
        "Catalog: {} ({})",
        report.catalog_origin,
        short_fingerprint(&report.catalog_fingerprint)
    );
    println!(
        "Mode: {}  Overrides: {}",
        report.options.validation_mode,
        if report.options.allow_override {
            "allowed"
        } else {
            "disabled"
        }
    );
    if !report.required.is_empty() {
        println!("Required: {}", report.required.join(", "));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Target"),
        header_cell("Type"),
        header_cell("Method"),
    ]);
    apply_table_style(&mut table);
    for entry in &result.entries {
        let target = if entry.is_rename() {
            Cell::new(&entry.target_name)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&entry.target_name)
        };
        table.add_row(vec![
            Cell::new(&entry.source_name),
            target,
            Cell::new(entry.semantic_type),
            method_cell(entry.detection_method),
        ]);
    }
    for source in &result.unmapped_sources {
        table.add_row(vec![
            Cell::new(source),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("unmapped"),
        ]);
    }
    println!("{table}");

    if !result.unmapped_targets.is_empty() {
        println!("Missing targets: {}", result.unmapped_targets.join(", "));
    }
    if !result.conflicts.is_empty() {
        let pairs: Vec<String> = result
            .conflicts
            .iter()
            .map(|c| format!("{} -> {}", c.source_name, c.target_name))
            .collect();
        println!("Conflicts: {}", pairs.join(", "));
    }
    if !result.diagnostics.is_empty() {
        print_diagnostics(result);
    }
    if let Err(error) = &report.outcome {
        eprintln!("error: {error}");
    }
}

fn print_diagnostics(result: &MappingResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Diagnostic"),
        header_cell("Subject"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for diagnostic in &result.diagnostics {
        table.add_row(vec![
            diagnostic_cell(diagnostic),
            Cell::new(diagnostic.subject().unwrap_or("-")),
            Cell::new(diagnostic.to_string()),
        ]);
    }
    println!("{table}");
}

pub fn print_catalog(catalog: &CandidateCatalog) {
    println!(
        "Catalog: {} ({})",
        catalog.origin(),
        short_fingerprint(catalog.fingerprint())
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Semantic type"),
        header_cell("Candidate"),
        header_cell("Expected size"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (semantic_type, candidates) in catalog.iter() {
        for candidate in candidates {
            let size = match candidate.expected_size {
                Some(size) => Cell::new(size),
                None => dim_cell("-"),
            };
            table.add_row(vec![
                Cell::new(semantic_type),
                Cell::new(&candidate.name),
                size,
            ]);
        }
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn short_fingerprint(fingerprint: &str) -> &str {
    fingerprint.get(..12).unwrap_or(fingerprint)
}

fn method_cell(method: DetectionMethod) -> Cell {
    let cell = Cell::new(method);
    match method {
        DetectionMethod::UserOverride => cell.fg(Color::Magenta),
        DetectionMethod::ExactName => cell.fg(Color::DarkGrey),
        _ => cell,
    }
}

fn diagnostic_cell(diagnostic: &Diagnostic) -> Cell {
    let color = if diagnostic.is_fatal() {
        Color::Red
    } else {
        Color::Yellow
    };
    Cell::new(diagnostic.kind().label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
