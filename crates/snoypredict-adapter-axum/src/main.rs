use snoypredict_adapter_axum::run_app;
use snoypredict_core::SnoyPredict;

fn main() {
    if let Err(err) = run_app::<SnoyPredict>(include_str!("../../../snoypredict.toml")) {
        eprintln!("snoypredict: {err:#}");
        std::process::exit(1);
    }
}
