//! Given steps for client type resolution BDD scenarios.

use super::world::{ResolutionWorld, ScenarioClient};
use rstest_bdd_macros::given;
use switchboard::client::{adapters::AnonymousClient, domain::FallbackStrategy};

#[given(r#"a client declaring type "{declared}""#)]
fn a_declared_client(world: &mut ResolutionWorld, declared: String) {
    world.client = Some(Box::new(ScenarioClient {
        declared: Some(declared),
        variant: Some("ScenarioClient".to_owned()),
    }));
}

#[given(r#"a client built from the "{variant}" variant"#)]
fn a_variant_client(world: &mut ResolutionWorld, variant: String) {
    world.client = Some(Box::new(ScenarioClient {
        declared: None,
        variant: Some(variant),
    }));
}

#[given("an anonymous client")]
fn an_anonymous_client(world: &mut ResolutionWorld) {
    world.client = Some(Box::new(AnonymousClient::noop()));
}

#[given(r#"the resolver uses the "{strategy}" fallback strategy"#)]
fn resolver_uses_strategy(
    world: &mut ResolutionWorld,
    strategy: String,
) -> Result<(), eyre::Report> {
    let parsed = FallbackStrategy::try_from(strategy.as_str())
        .map_err(|err| eyre::eyre!("{err}"))?;
    world.config = world.config.clone().with_fallback(parsed);
    Ok(())
}
