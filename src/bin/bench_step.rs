#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::env;
use std::time::Instant;
use torus_life::toruslife::{Rule, ToroidalLife, ToroidalLifeConfig};

#[derive(Clone, Debug)]
struct BenchConfig {
    size: i32,
    density: u32,
    rule: Rule,
    warmup: u64,
    iters: u64,
    seed: u64,
    json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            density: 2,
            rule: Rule::Life,
            warmup: 3,
            iters: 200,
            seed: 0x5EED_1234_ABCD_EF01,
            json: false,
        }
    }
}

fn parse_args() -> BenchConfig {
    let mut cfg = BenchConfig::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => {
                if let Some(v) = args.next() {
                    cfg.size = v.parse().expect("--size expects i32");
                }
            }
            "--density" => {
                if let Some(v) = args.next() {
                    cfg.density = v.parse().expect("--density expects u32");
                }
            }
            "--rule" => {
                if let Some(v) = args.next() {
                    cfg.rule = v.parse().unwrap_or_else(|err| panic!("{err}"));
                }
            }
            "--warmup" => {
                if let Some(v) = args.next() {
                    cfg.warmup = v.parse().expect("--warmup expects u64");
                }
            }
            "--iters" => {
                if let Some(v) = args.next() {
                    cfg.iters = v.parse().expect("--iters expects u64");
                }
            }
            "--seed" => {
                if let Some(v) = args.next() {
                    cfg.seed = if let Some(hex) = v.strip_prefix("0x") {
                        u64::from_str_radix(hex, 16).expect("--seed hex parse failed")
                    } else {
                        v.parse().expect("--seed expects u64")
                    };
                }
            }
            "--json" => {
                cfg.json = true;
            }
            other => panic!("unknown arg: {other}"),
        }
    }
    cfg
}

fn main() {
    let cfg = parse_args();

    let engine_config = ToroidalLifeConfig::default()
        .rule(cfg.rule)
        .seed_density(cfg.density)
        .rng_seed(cfg.seed);
    let mut engine =
        ToroidalLife::with_config(cfg.size, engine_config).unwrap_or_else(|err| panic!("{err}"));

    if cfg.warmup > 0 {
        engine.step(cfg.warmup);
    }

    let start = Instant::now();
    engine.step(cfg.iters);
    let elapsed = start.elapsed();
    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_ms = total_ms / cfg.iters as f64;
    let cells = (cfg.size as u64) * (cfg.size as u64) * cfg.iters;
    let cells_per_sec = cells as f64 / elapsed.as_secs_f64();
    let population = engine.population();

    if cfg.json {
        println!(
            "{{\"size\":{},\"density\":{},\"rule\":\"{}\",\"warmup\":{},\"iters\":{},\"seed\":{},\"total_ms\":{:.6},\"avg_ms\":{:.6},\"cells_per_sec\":{:.0},\"population\":{}}}",
            cfg.size,
            cfg.density,
            cfg.rule.name(),
            cfg.warmup,
            cfg.iters,
            cfg.seed,
            total_ms,
            avg_ms,
            cells_per_sec,
            population,
        );
    } else {
        println!(
            "size={},density={},rule={},warmup={},iters={},seed={},total_ms={:.6},avg_ms={:.6},cells_per_sec={:.0},population={}",
            cfg.size,
            cfg.density,
            cfg.rule.name(),
            cfg.warmup,
            cfg.iters,
            cfg.seed,
            total_ms,
            avg_ms,
            cells_per_sec,
            population,
        );
    }
}
