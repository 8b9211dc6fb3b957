// zenvibe - a safe space for teens to share and support each other

use zenvibe::cli;

#[tokio::main]
async fn main() -> miette::Result<()> {
    cli::run().await
}
