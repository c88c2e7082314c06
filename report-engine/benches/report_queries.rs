//! Benchmarks for the report pipeline over a scaled-up sample project.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use project_model::{
    sample_project, Aggregation, CustomReport, DataSource, FilterClause, FilterOp, FilterValue,
    Grouping, Project,
};
use report_engine::process_report;

/// Repeats the sample expenses until the project holds `target` rows.
fn scaled_project(target: usize) -> Project {
    let mut project = sample_project();
    let base = project.expenses.clone();
    while project.expenses.len() < target {
        for (i, expense) in base.iter().enumerate() {
            let mut clone = expense.clone();
            clone.id = format!("exp-scaled-{}-{}", project.expenses.len(), i);
            project.expenses.push(clone);
        }
    }
    project.expenses.truncate(target);
    project
}

fn filtered_grouped_config() -> CustomReport {
    CustomReport {
        id: "bench-filtered-grouped".to_string(),
        name: "Billable spend by category".to_string(),
        data_source: DataSource::Expenses,
        fields: Vec::new(),
        filters: vec![FilterClause {
            id: "bench-f1".to_string(),
            field: "invoicable".to_string(),
            operator: FilterOp::Equals,
            value: FilterValue::Single("true".to_string()),
        }],
        grouping: Some(Grouping {
            field: "category".to_string(),
            aggregation: Aggregation::Sum,
            agg_field: "amount".to_string(),
        }),
    }
}

fn flat_config() -> CustomReport {
    CustomReport {
        id: "bench-flat".to_string(),
        name: "All expenses".to_string(),
        data_source: DataSource::Expenses,
        fields: vec!["date".to_string(), "vendor".to_string(), "amount".to_string()],
        filters: Vec::new(),
        grouping: None,
    }
}

fn bench_process_report(c: &mut Criterion) {
    let project = scaled_project(1_000);
    let grouped = filtered_grouped_config();
    let flat = flat_config();

    c.bench_function("process_report/flat_1k", |b| {
        b.iter(|| process_report(black_box(&project), black_box(&flat)))
    });

    c.bench_function("process_report/filtered_grouped_1k", |b| {
        b.iter(|| process_report(black_box(&project), black_box(&grouped)))
    });
}

criterion_group!(benches, bench_process_report);
criterion_main!(benches);
