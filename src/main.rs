use clap::Parser;
use hashkeys::io_utils::{hashkeys_cli_error, io_cli_error, read_seed, simple_cli_error};
use hashkeys::report::{key_records, write_csv, Summary};
use hashkeys::{
    resume_or_start, CheckpointWriter, HashAlgorithm, KeySearch, SearchConfig, DEFAULT_KEY_COUNT,
    DEFAULT_LOOKAHEAD, STRETCH_ROUNDS,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Find the index of the last one-time pad key, with plain and stretched
/// fingerprints.
#[derive(Parser)]
struct Args {
    /// File holding the seed on its first line
    input: PathBuf,
    /// Number of keys to find
    #[arg(long, default_value_t = DEFAULT_KEY_COUNT)]
    keys: usize,
    /// Digest used for fingerprints
    #[arg(long, default_value_t = HashAlgorithm::Md5)]
    hash: HashAlgorithm,
    /// Extra hashing rounds for part two
    #[arg(long, default_value_t = STRETCH_ROUNDS)]
    rounds: u32,
    /// Scans after a candidate during which it can be confirmed
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD)]
    lookahead: u64,
    /// Print a JSON summary instead of plain answers
    #[arg(long)]
    json: bool,
    /// Write every final key of both parts to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Resume both parts from, and save them to, `part1.ckpt` and
    /// `part2.ckpt` in this directory
    #[arg(long)]
    checkpoint_dir: Option<PathBuf>,
    /// Scans between checkpoint saves
    #[arg(long, default_value_t = 1000)]
    checkpoint_every: u64,
    /// Show a spinner while searching
    #[arg(long)]
    progress: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let seed = read_seed(&args.input)?;
    let start_time = Instant::now();

    let part_one = SearchConfig {
        algorithm: args.hash,
        stretch: 0,
        lookahead: args.lookahead,
        key_count: args.keys,
    };
    let part_two = SearchConfig {
        stretch: args.rounds,
        ..part_one
    };

    if let Some(dir) = &args.checkpoint_dir {
        fs::create_dir_all(dir).map_err(|e| io_cli_error("creating checkpoint directory", dir, e))?;
    }
    let checkpoint = |name: &str| args.checkpoint_dir.as_deref().map(|dir| dir.join(name));

    let part_one_ckpt = checkpoint("part1.ckpt");
    let mut first = start(&seed, &part_one, part_one_ckpt.as_deref())
        .map_err(|e| hashkeys_cli_error("part one", e))?;
    let keys_one = solve(&mut first, part_one_ckpt, &args, "part one")?;

    let part_two_ckpt = checkpoint("part2.ckpt");
    let mut second = start(&seed, &part_two, part_two_ckpt.as_deref())
        .map_err(|e| hashkeys_cli_error("part two", e))?;
    let keys_two = solve(&mut second, part_two_ckpt, &args, "part two")?;

    if let Some(path) = &args.csv {
        let mut records = key_records(1, &seed, &first.fingerprinter(), &keys_one);
        records.extend(key_records(2, &seed, &second.fingerprinter(), &keys_two));
        write_csv(path, &records).map_err(|e| match e {
            hashkeys::HashKeysError::Io(io) => io_cli_error("writing csv", path, io),
            other => hashkeys_cli_error("writing csv", other),
        })?;
    }

    let answer_one = *keys_one
        .last()
        .ok_or_else(|| simple_cli_error("no keys found for part one"))?;
    let answer_two = *keys_two
        .last()
        .ok_or_else(|| simple_cli_error("no keys found for part two"))?;

    first.stats().report("part one");
    second.stats().report("part two");

    if args.json {
        let summary = Summary {
            seed,
            algorithm: args.hash.to_string(),
            key_count: args.keys,
            part_one: answer_one,
            part_two: answer_two,
            stretch: args.rounds,
            scanned: first.stats().scanned + second.stats().scanned,
            elapsed_ms: start_time.elapsed().as_millis(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("part one: {answer_one}");
        println!("part two: {answer_two}");
        eprintln!("Solved in {:.2?}", start_time.elapsed());
    }

    Ok(())
}

fn start(
    seed: &str,
    config: &SearchConfig,
    checkpoint: Option<&Path>,
) -> Result<KeySearch, hashkeys::HashKeysError> {
    match checkpoint {
        Some(path) => resume_or_start(path, seed, config),
        None => KeySearch::new(seed, config),
    }
}

fn solve(
    search: &mut KeySearch,
    checkpoint: Option<PathBuf>,
    args: &Args,
    label: &'static str,
) -> Result<Vec<u64>, Box<dyn std::error::Error>> {
    let mut writer = checkpoint
        .map(|path| CheckpointWriter::new(path, args.checkpoint_every))
        .transpose()
        .map_err(|e| hashkeys_cli_error(label, e))?;

    let bar = if args.progress {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {prefix}: {msg}",
        )?);
        bar.set_prefix(label);
        bar
    } else {
        ProgressBar::hidden()
    };

    let keys = search.run_with(|step, search| {
        if let Some(writer) = writer.as_mut() {
            writer.on_step(step, search);
        }
        if step.index % 256 == 0 {
            bar.set_message(format!("index {} | {} keys", step.index, search.keys().len()));
            bar.tick();
        }
    });
    bar.finish_and_clear();

    if let Some(writer) = writer {
        let path = writer.path().to_path_buf();
        writer
            .finish(search)
            .map_err(|e| match e {
                hashkeys::HashKeysError::Io(io) => io_cli_error("saving checkpoint", &path, io),
                other => hashkeys_cli_error("saving checkpoint", other),
            })?;
    }
    Ok(keys)
}
