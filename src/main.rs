use bruno_env::bootstrap::{init_tracing, DEFAULT_FILTER};
use bruno_env::setup::print_setup_overview;

fn main() {
    init_tracing(DEFAULT_FILTER);
    tracing::debug!("printing setup overview");
    print_setup_overview();
}
