use hashkeys::scan_runs;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                let scan = scan_runs(text);
                if scan.triple.is_none() {
                    assert!(scan.quintuples.is_empty());
                }
            }
        });
    }
}
