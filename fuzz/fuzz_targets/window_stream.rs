use hashkeys::{Fingerprinter, KeySearch};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Some((&lookahead, rest)) = data.split_first() else {
                return;
            };
            let lookahead = u64::from(lookahead.max(1));
            let mut search = KeySearch::with_fingerprinter("fuzz", Fingerprinter::default(), lookahead);
            for chunk in rest.split(|&b| b == b'\n') {
                let fp = String::from_utf8_lossy(chunk);
                let step = search.consume(&fp);
                for &key in &step.confirmed {
                    assert!(key < step.index && step.index - key <= lookahead);
                }
            }
            assert!(search.keys().windows(2).all(|w| w[0] < w[1]));
        });
    }
}
