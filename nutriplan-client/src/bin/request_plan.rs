use std::{env, error::Error, fs::File, io::BufReader};

use nutriplan_client::report;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "profile.json".to_owned());
    let url = args
        .next()
        .unwrap_or_else(|| "http://localhost:5000/".to_owned());

    let file = File::open(&path)?;
    let profile: Value = serde_json::from_reader(BufReader::new(file))?;
    let client = nutriplan_client::create(url);
    print!("{}", report::request_plan(&client, &profile).await?);

    Ok(())
}
