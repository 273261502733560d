//! Algorithm performance route handlers.
//!
//! The page issues its three reads concurrently; the backend computes every
//! benchmark, this handler only arranges the numbers for display.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use shopjoy_client::types::{AlgorithmBenchmark, AlgorithmRecommendations};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Default synthetic dataset size for benchmarks.
const DEFAULT_DATASET_SIZE: u32 = 1000;

/// Dataset sizes offered by the selector.
const DATASET_SIZES: &[u32] = &[100, 1000, 5000, 10000];

/// Query parameters for the algorithm page.
#[derive(Debug, Deserialize)]
pub struct AlgorithmsQuery {
    pub dataset_size: Option<u32>,
}

/// One benchmark row prepared for the template.
pub struct BenchmarkView {
    pub algorithm_name: String,
    pub execution_time_ms: String,
    pub memory_used_kb: String,
    pub fastest: bool,
}

/// Dataset size option for the selector.
pub struct SizeOption {
    pub value: u32,
    pub selected: bool,
}

/// Algorithm performance page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/algorithms.html")]
pub struct AlgorithmsTemplate {
    pub dataset_size: u32,
    pub sizes: Vec<SizeOption>,
    pub sort_benchmarks: Vec<BenchmarkView>,
    pub search_benchmarks: Vec<BenchmarkView>,
    pub recommendations: AlgorithmRecommendations,
}

/// Algorithm performance page.
///
/// A change of the dataset size selector re-runs all three reads.
pub async fn index(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<AlgorithmsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let dataset_size = query.dataset_size.unwrap_or(DEFAULT_DATASET_SIZE);

    let (sorts, searches, recommendations) = tokio::try_join!(
        state.api().compare_sort_algorithms(dataset_size),
        state.api().compare_search_algorithms(dataset_size),
        state.api().get_algorithm_recommendations(dataset_size),
    )?;

    let sizes = DATASET_SIZES
        .iter()
        .map(|&value| SizeOption {
            value,
            selected: value == dataset_size,
        })
        .collect();

    Ok(AlgorithmsTemplate {
        dataset_size,
        sizes,
        sort_benchmarks: benchmark_views(sorts.into_values().collect()),
        search_benchmarks: benchmark_views(searches.into_values().collect()),
        recommendations,
    })
}

/// Sort benchmarks fastest-first and mark the winner.
fn benchmark_views(mut benchmarks: Vec<AlgorithmBenchmark>) -> Vec<BenchmarkView> {
    benchmarks.sort_by(|a, b| {
        a.execution_time_ms
            .partial_cmp(&b.execution_time_ms)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    benchmarks
        .into_iter()
        .enumerate()
        .map(|(i, b)| BenchmarkView {
            algorithm_name: b.algorithm_name,
            execution_time_ms: format!("{:.3}", b.execution_time_ms),
            memory_used_kb: format!("{:.1}", b.memory_used_bytes as f64 / 1024.0),
            fastest: i == 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benchmark(name: &str, ms: f64) -> AlgorithmBenchmark {
        AlgorithmBenchmark {
            algorithm_name: name.to_string(),
            execution_time_ms: ms,
            memory_used_bytes: 2048,
        }
    }

    #[test]
    fn test_benchmarks_sorted_fastest_first() {
        let views = benchmark_views(vec![
            benchmark("MergeSort", 4.2),
            benchmark("QuickSort", 1.7),
            benchmark("BubbleSort", 96.0),
        ]);

        let names: Vec<&str> = views.iter().map(|v| v.algorithm_name.as_str()).collect();
        assert_eq!(names, vec!["QuickSort", "MergeSort", "BubbleSort"]);
        assert!(views[0].fastest);
        assert!(!views[1].fastest);
    }

    #[test]
    fn test_memory_shown_in_kilobytes() {
        let views = benchmark_views(vec![benchmark("BinarySearch", 0.5)]);
        assert_eq!(views[0].memory_used_kb, "2.0");
    }
}
