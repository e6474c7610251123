use clap::Parser;
use hashkeys::{scan_runs, Fingerprinter, HashAlgorithm};

/// Print fingerprints of a seed with their triple and quintuple runs.
#[derive(Parser)]
struct Args {
    /// Seed prefixed to every index
    seed: String,
    /// First index to print
    #[arg(default_value_t = 0)]
    start: u64,
    /// Number of indices to print
    #[arg(default_value_t = 20)]
    count: u64,
    /// Extra hashing rounds
    #[arg(long, default_value_t = 0)]
    rounds: u32,
    /// Digest used for fingerprints
    #[arg(long, default_value_t = HashAlgorithm::Md5)]
    hash: HashAlgorithm,
    /// Only print indices with at least a triple
    #[arg(long)]
    runs_only: bool,
}

fn main() {
    let args = Args::parse();
    let fingerprinter = Fingerprinter::new(args.hash, args.rounds);
    let end = args.start.saturating_add(args.count);

    let mut shown = 0u64;
    for index in args.start..end {
        let fp = fingerprinter.fingerprint(&args.seed, index);
        let scan = scan_runs(&fp);
        if args.runs_only && scan.is_empty() {
            continue;
        }
        let triple = scan.triple.map_or_else(|| "-".to_string(), |c| c.to_string());
        let quintuples: String = if scan.quintuples.is_empty() {
            "-".to_string()
        } else {
            scan.quintuples.iter().collect()
        };
        println!("{index:>8}  {fp}  triple={triple}  quintuples={quintuples}");
        shown += 1;
    }

    eprintln!("Printed {shown} of {} fingerprints", end - args.start);
}
