//! When steps for client type resolution BDD scenarios.

use super::world::ResolutionWorld;
use rstest_bdd_macros::when;

#[when("the client type is resolved")]
fn client_type_resolved(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    resolve_times(world, 1)
}

#[when("the client type is resolved {count:usize} times")]
fn client_type_resolved_times(
    world: &mut ResolutionWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    resolve_times(world, count)
}

fn resolve_times(world: &mut ResolutionWorld, count: usize) -> Result<(), eyre::Report> {
    let resolver = world.resolver()?;
    let client = world
        .client
        .as_deref()
        .ok_or_else(|| eyre::eyre!("no client in scenario world"))?;
    let resolved: Vec<_> = (0..count)
        .map(|_| resolver.resolve_detailed(client))
        .collect();
    world.resolved.extend(resolved);
    Ok(())
}
