mod util;

use collatab::data::Row;
use collatab::output::horizontal::{self, AgreementSort, HorizontalOptions};
use collatab::output::{self, ExportFormat, View, alignment, csv, vertical};
use collatab::table::{Html, Terminal};
use collatab::{AlignmentTable, Column, RenderError, Token, Witness};
use util::glasses;

#[test]
fn test_glasses_disagreement_and_index_caption() {
    let (table, witnesses) = glasses();
    let options = HorizontalOptions::new("A");

    let counts = horizontal::disagreement_counts(&table, &witnesses, &options).unwrap();
    assert_eq!(counts, vec![("A".to_string(), 0), ("B".to_string(), 2)]);

    let result = horizontal::build(&table, &witnesses, &options).unwrap();
    let caption: Vec<&str> = result.rows[0].cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(caption, vec!["Wit", "Dist", "2", "4", "-"]);
    assert_eq!(result.rows[2].cells[1].text, "2");
}

#[test]
fn test_k_of_n_disagreements() {
    let witnesses = vec![Witness::new("A"), Witness::new("B")];
    let differing = [1, 4, 5];
    let columns = (0..8)
        .map(|i| {
            let b = if differing.contains(&i) { "other" } else { "same" };
            Column::new(differing.contains(&i))
                .with_reading("A", vec![Token::new("same")])
                .with_reading("B", vec![Token::new(b)])
        })
        .collect();
    let table = AlignmentTable::new(columns);

    let counts =
        horizontal::disagreement_counts(&table, &witnesses, &HorizontalOptions::new("A")).unwrap();
    assert_eq!(counts[1].1, differing.len());
}

#[test]
fn test_column_count_invariance_across_views() {
    let (table, witnesses) = glasses();
    let n = table.columns.len();

    let vertical = vertical::build(&table, &witnesses);
    for track in 0..witnesses.len() {
        assert_eq!(vertical.rows.iter().filter(|r| r.cells.get(track).is_some()).count(), n);
    }

    let options = HorizontalOptions {
        segmentation: true,
        ..HorizontalOptions::new("B")
    };
    for row in horizontal::build(&table, &witnesses, &options).unwrap().rows {
        assert_eq!(row.cells.len() - 2, n);
    }

    for row in alignment::build(&table, &witnesses).rows {
        assert_eq!(row.cells.len() - 1, n);
    }
}

#[test]
fn test_gap_fidelity_display_versus_export() {
    let (table, witnesses) = glasses();

    let vertical = vertical::build(&table, &witnesses);
    assert_eq!(vertical.rows[2].cells[0].text, "-");

    let exported = csv::export(&table, ExportFormat::Csv).unwrap();
    let first = exported.lines().next().unwrap();
    assert_eq!(first, "A,I bought ,this glass,");
}

#[test]
fn test_export_csv_and_tsv_are_field_identical() {
    let witnesses = vec![Witness::new("A"), Witness::new("B")];
    let mut table = AlignmentTable::new(Vec::new());
    table.rows = vec![
        Row {
            header: "A".to_string(),
            cells: vec![Some("red, white".to_string()), None],
        },
        Row {
            header: "B".to_string(),
            cells: vec![Some("blue".to_string()), Some("green".to_string())],
        },
    ];
    assert_eq!(witnesses.len(), table.rows.len());

    let csv_text = csv::export(&table, ExportFormat::Csv).unwrap();
    let tsv_text = csv::export(&table, ExportFormat::Tsv).unwrap();

    assert_eq!(csv_text, "A,\"red, white\",\nB,blue,green\n");
    assert_eq!(tsv_text, "A\tred, white\t\nB\tblue\tgreen\n");

    let parse = |text: &str, delimiter: u8| -> Vec<Vec<String>> {
        ::csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .from_reader(text.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    };
    assert_eq!(parse(&csv_text, b','), parse(&tsv_text, b'\t'));
}

#[test]
fn test_unsupported_format_is_rejected() {
    let (table, _) = glasses();
    let err = csv::export_named(&table, "xml").unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedFormat(_)));
}

#[test]
fn test_rendering_is_deterministic() {
    let (table, witnesses) = glasses();
    let options = HorizontalOptions {
        sort: AgreementSort::Lexicographic,
        ..HorizontalOptions::new("A")
    };

    for view in [View::Vertical, View::Horizontal, View::Alignment, View::Csv, View::Tsv] {
        let first = output::render_view(view, &table, &witnesses, &options, &Html).unwrap();
        let second = output::render_view(view, &table, &witnesses, &options, &Html).unwrap();
        assert_eq!(first, second, "{} view differs between runs", view.as_str());
    }
}

#[test]
fn test_lexicographic_sort_of_counts() {
    // Counts 2, 10 and 1 for B, C and D against base A.
    let witnesses = ["A", "B", "C", "D"].map(Witness::new).to_vec();
    let columns = (0..10)
        .map(|i| {
            Column::new(true)
                .with_reading("A", vec![Token::new("a")])
                .with_reading("B", vec![Token::new(if i < 2 { "b" } else { "a" })])
                .with_reading("C", vec![Token::new("c")])
                .with_reading("D", vec![Token::new(if i == 0 { "d" } else { "a" })])
        })
        .collect();
    let table = AlignmentTable::new(columns);
    let options = HorizontalOptions {
        segmentation: true,
        sort: AgreementSort::Lexicographic,
        ..HorizontalOptions::new("A")
    };

    let result = horizontal::build(&table, &witnesses, &options).unwrap();
    let counts: Vec<&str> = result.rows[1..].iter().map(|r| r.cells[1].text.as_str()).collect();

    assert_eq!(counts, vec!["1", "10", "2"]);
}

#[test]
fn test_markups_render_same_structure() {
    let (table, witnesses) = glasses();
    let options = HorizontalOptions::new("A");

    let html = horizontal::render(&table, &witnesses, &options, &Html).unwrap();
    assert_eq!(html.matches("<tr>").count(), 3);
    assert!(html.contains("bgcolor=\"#fa9392\""));

    let text = horizontal::render(&table, &witnesses, &options, &Terminal::new(false)).unwrap();
    assert_eq!(text.lines().filter(|l| l.starts_with('|')).count(), 3);
    assert!(text.contains("| Wit | Dist |"));
}

#[test]
fn test_unknown_base_produces_no_output() {
    let (table, witnesses) = glasses();
    let result = output::render_view(
        View::Horizontal,
        &table,
        &witnesses,
        &HorizontalOptions::new("C"),
        &Html,
    );
    assert!(matches!(result, Err(RenderError::UnknownBaseWitness(_))));
}
