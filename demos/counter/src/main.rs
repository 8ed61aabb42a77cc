use anyhow::{Context, bail};
use intervention_core::*;

fn parse_action(arg: &str) -> anyhow::Result<Action> {
    Ok(match arg {
        "add" | "add_one" => Action::AddOne,
        "reset" => Action::Reset,
        "double" | "double_count" => Action::DoubleCount,
        other => {
            let known: Vec<&str> = Action::ALL.iter().map(|a| a.name()).collect();
            bail!("unknown action `{other}` (expected one of: {})", known.join(", "))
        }
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let actions = std::env::args()
        .skip(1)
        .map(|arg| parse_action(&arg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let registry = StoreRegistry::new();
    let store = use_intervention_store(&registry).context("mounting the intervention store")?;

    store.on_action(|action| log::info!("action: {action}"));
    store.subscribe(|state| log::info!("counter: {}", state.counter));

    for action in actions {
        store.dispatch(action);
    }
    println!("{} = {}", store.name(), store.counter());

    // Swap the instance as a dev reload would; the counter and hooks carry over.
    let reloaded = registry
        .accept_hot_update(InterventionStore::new)
        .context("hot-updating the intervention store")?;
    reloaded.add_one();
    println!("after reload and add_one: {} = {}", reloaded.name(), reloaded.counter());

    let snapshot = serde_json::to_string(&reloaded.export_state()).context("serialising the store snapshot")?;
    println!("{snapshot}");

    Ok(())
}
