use std::collections::HashMap;

use futures_util::future::join_all;
use gallery_logging::{gallery_debug, gallery_info};
use url::Url;

use crate::probe::Probe;
use crate::{DiscoveryPlan, DiscoveryReport, ProbeError, ResolvedHit};

/// Runs every probe of `plan` concurrently and awaits them jointly.
///
/// Completion is the joint await itself: the report exists only after all
/// `count × extensions` outcomes have settled, so a partial result can never
/// be observed. For each index the winner is the first extension in
/// candidate-list order that succeeded; other successes for that index are
/// discarded. A failed index is simply excluded from `resolved`.
///
/// Errors only when the plan cannot be expanded into valid URLs; individual
/// probe failures are absorbed into the report.
pub async fn discover(
    probe: &dyn Probe,
    plan: &DiscoveryPlan,
) -> Result<DiscoveryReport, ProbeError> {
    let targets = plan.targets()?;

    let outcomes = join_all(targets.iter().map(|target| async move {
        let outcome = probe.probe(&target.url).await;
        (target, outcome)
    }))
    .await;

    let probes_settled = outcomes.len();
    let mut probes_failed = 0;
    let mut successes: HashMap<(u32, &str), &Url> = HashMap::new();
    for (target, outcome) in &outcomes {
        match outcome {
            Ok(()) => {
                successes.insert((target.index, target.extension.as_str()), &target.url);
            }
            Err(err) => {
                probes_failed += 1;
                gallery_debug!(
                    "probe missed {} ({}: {})",
                    target.url,
                    err.kind,
                    err.message
                );
            }
        }
    }

    let mut resolved = Vec::new();
    for index in 1..=plan.count() {
        for extension in plan.extensions() {
            if let Some(url) = successes.get(&(index, extension.as_str())) {
                resolved.push(ResolvedHit {
                    index,
                    extension: extension.clone(),
                    url: (*url).clone(),
                });
                break;
            }
        }
    }

    gallery_info!(
        "discovery settled: {} probes, {} failed, {} indices resolved",
        probes_settled,
        probes_failed,
        resolved.len()
    );

    Ok(DiscoveryReport {
        resolved,
        probes_settled,
        probes_failed,
    })
}
