use crate::benchmark::BenchmarkResult;

/// Formats the measures as `[m1, m2, ..., mn]`
pub fn format_measures(measures: &[f64]) -> String {
	let measures: Vec<String> = measures.iter().map(|measure| measure.to_string()).collect();
	format!("[{}]", measures.join(", "))
}

pub fn format_summary(result: &BenchmarkResult) -> String {
	let format_ratio = |ratio: Option<f64>| match ratio {
		Some(ratio) => format!("{:.4}", ratio),
		None => String::from("-"),
	};

	format!(
		"samples: {}\noptimal: {}\nmin ratio: {}\nmean ratio: {}\nmax ratio: {}\nsearch nodes: {}",
		result.ratios.len(), result.num_optimal, format_ratio(result.min_ratio()),
		format_ratio(result.mean_ratio()), format_ratio(result.max_ratio()), result.nodes_explored
	)
}
