use std::process::Command;

const MAKESPAN_BINARY: &str = "../target/release/makespan";
const NUM_SAMPLES: usize = 100;
const NUM_TASKS: usize = 12;

fn main() {
	let mut worst_mean: Option<(String, f64)> = None;

	for distribution in ["uniform", "normal"] {
		for num_machines in 2 ..= 6 {
			let configuration = format!("{} durations on {} machines", distribution, num_machines);
			let output = Command::new(MAKESPAN_BINARY)
				.arg("--distribution").arg(distribution)
				.arg("--num-machines").arg(format!("{}", num_machines))
				.arg("--num-tasks").arg(format!("{}", NUM_TASKS))
				.arg("--num-samples").arg(format!("{}", NUM_SAMPLES))
				.arg("--summary")
				.output().expect("Failed to start makespan; run `cargo build --release` first");
			if !output.status.success() {
				panic!("Failed to run makespan {}", String::from_utf8_lossy(&output.stderr));
			}

			let stdout = String::from_utf8_lossy(&output.stdout);
			let mean_ratio = get_summary_value(&stdout, "mean ratio")
				.unwrap_or_else(|| panic!("No mean ratio in output of {}", configuration));
			println!("{}: mean ratio {}", configuration, mean_ratio);

			if worst_mean.as_ref().is_none_or(|(_, worst)| mean_ratio > *worst) {
				worst_mean = Some((configuration, mean_ratio));
			}
		}
	}

	if let Some((configuration, mean_ratio)) = worst_mean {
		println!("Worst mean ratio {} for {}", mean_ratio, configuration);
	}
}

fn get_summary_value(output: &str, key: &str) -> Option<f64> {
	output.lines()
		.filter_map(|line| line.split_once(':'))
		.find(|(line_key, _)| line_key.trim() == key)
		.and_then(|(_, value)| value.trim().parse().ok())
}
