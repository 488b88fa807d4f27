use capicrypto_algorithms::search::{search_curves, Rejection, SearchConfig};

fn main() {
    // Three-digit palindromic moduli with the default coefficient bases
    let primes = [101, 131, 151, 181, 191, 313, 353, 373, 383, 727, 757, 787, 797, 919, 929];
    let config = SearchConfig::default();
    let config = SearchConfig::new(
        primes.iter().map(|&p: &u64| p.into()).collect(),
        config.bases,
    );

    let report = match search_curves(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("search failed: {e}");
            return;
        }
    };

    for curve in &report.found {
        println!(
            "p = {:>3}  a = {:>3}  b = {:>2}  G = {:<12}  n = {} (trace {})",
            curve.params.p(),
            curve.params.a(),
            curve.params.b(),
            curve.generator.to_string(),
            curve.order,
            curve.trace()
        );
    }

    let composite = report
        .rejections(|r| matches!(r, Rejection::CompositeOrder { .. }))
        .count();
    println!(
        "{} curves with prime order, {} rejected ({} with a composite order)",
        report.found.len(),
        report.rejected.len(),
        composite
    );
}
