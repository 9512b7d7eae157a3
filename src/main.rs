#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::time::Instant;
use torus_life::toruslife::{Rule, Shape, ToroidalLife, ToroidalLifeConfig};

const DEFAULT_SIZE: i32 = 512;
const TOTAL_ITERATIONS: u64 = 2000;
const CHECK_INTERVAL: u64 = 100;

struct MainArgs {
    size: i32,
    iterations: u64,
    shape: Option<Shape>,
    config: ToroidalLifeConfig,
}

fn parse_args() -> MainArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut config = ToroidalLifeConfig::default();
    let mut size = DEFAULT_SIZE;
    let mut iterations = TOTAL_ITERATIONS;
    let mut shape = None;
    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                size = next_arg(i, "--size")
                    .parse()
                    .expect("--size requires an integer");
            }
            "--iterations" => {
                i += 1;
                iterations = next_arg(i, "--iterations")
                    .parse()
                    .expect("--iterations requires a positive integer");
            }
            "--rule" => {
                i += 1;
                let rule: Rule = next_arg(i, "--rule")
                    .parse()
                    .unwrap_or_else(|err| panic!("{err}"));
                config = config.rule(rule);
            }
            "--density" => {
                i += 1;
                let density: u32 = next_arg(i, "--density")
                    .parse()
                    .expect("--density requires a non-negative integer");
                config = config.seed_density(density);
            }
            "--noise" => {
                config = config.noise(true);
            }
            "--noise-range" => {
                i += 1;
                let range: f64 = next_arg(i, "--noise-range")
                    .parse()
                    .expect("--noise-range requires a number");
                config = config.noise(true).noise_range(range);
            }
            "--seed" => {
                i += 1;
                let seed: u64 = next_arg(i, "--seed")
                    .parse()
                    .expect("--seed requires a u64");
                config = config.rng_seed(seed);
            }
            "--shape" => {
                i += 1;
                let parsed: Shape = next_arg(i, "--shape")
                    .parse()
                    .unwrap_or_else(|err| panic!("{err}"));
                shape = Some(parsed);
            }
            other => panic!(
                "unknown argument: {other}\nusage: torus-life [--size N] [--iterations N] [--rule NAME] [--density N] [--noise] [--noise-range F] [--seed N] [--shape NAME]"
            ),
        }
        i += 1;
    }
    MainArgs {
        size,
        iterations,
        shape,
        config,
    }
}

fn run(args: MainArgs) {
    let mut engine = ToroidalLife::with_config(args.size, args.config)
        .unwrap_or_else(|err| panic!("{err}"));
    if let Some(shape) = args.shape {
        engine.kill();
        engine.draw_shape(args.size / 2, args.size / 2, shape);
    }

    println!(
        "size={} rule={} population={}",
        engine.size(),
        engine.rule().name(),
        engine.population()
    );

    let mut total_duration = std::time::Duration::ZERO;
    let checkpoints = (args.iterations / CHECK_INTERVAL).max(1);
    for checkpoint in 1..=checkpoints {
        let iteration = checkpoint * CHECK_INTERVAL;

        let start = Instant::now();
        engine.step(CHECK_INTERVAL.min(args.iterations));
        let phase = start.elapsed();
        total_duration += phase;

        let phase_ms = phase.as_secs_f64() * 1000.0;
        let avg_ms = phase_ms / CHECK_INTERVAL as f64;
        println!(
            "Iteration {iteration}: pop = {}, {phase_ms:.3} ms total, {avg_ms:.6} ms/iter",
            engine.population()
        );
    }

    let total_ms = total_duration.as_secs_f64() * 1000.0;
    let avg_ms = total_ms / args.iterations as f64;
    println!("\n--- Summary ({} iterations) ---", args.iterations);
    println!("{total_ms:.3} ms total, {avg_ms:.6} ms/iter");
}

fn main() {
    run(parse_args());
}
