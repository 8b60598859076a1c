use clap::Parser;
use makespan::benchmark::*;
use makespan::cli::Args;
use makespan::generator::TaskGenerator;
use makespan::parser::parse_problem;
use makespan::report::*;
use makespan::solver::ExactSolver;

fn init_logging() {
	env_logger::Builder::from_default_env()
		.format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
		.init();
}

fn solve_file(args: &Args, tasks_file: &str) -> makespan::Result<()> {
	let problem = parse_problem(tasks_file, args.num_machines)?;
	println!("Found {} tasks using {} machines", problem.get_tasks().len(), problem.get_num_machines());

	let mut exact_solver = ExactSolver::new(args.exact_options());
	let comparison = compare(&problem, &mut exact_solver)?;
	println!("approximate makespan: {}", comparison.approximate);
	println!("exact makespan: {}", comparison.exact);
	println!("lower bound: {}", problem.lower_bound());
	println!("ratio: {}", comparison.ratio);
	if args.summary {
		println!("search: {}", exact_solver.get_statistics());
	}
	Ok(())
}

fn run_benchmark(args: &Args) -> makespan::Result<()> {
	let generator = TaskGenerator::new(args.task_distribution()?, args.seed);
	let result = Benchmark::new(args.benchmark_config(), generator).run()?;
	println!("{}", format_measures(&result.ratios));
	if args.summary {
		println!("{}", format_summary(&result));
	}
	Ok(())
}

fn main() {
	init_logging();
	let args = Args::parse();
	let result = match &args.tasks_file {
		Some(tasks_file) => solve_file(&args, tasks_file),
		None => run_benchmark(&args),
	};
	if let Err(error) = result {
		eprintln!("{}", error);
		std::process::exit(1);
	}
}
