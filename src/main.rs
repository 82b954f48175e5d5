use std::env;
use std::fs;

use tracing_subscriber::EnvFilter;

use dnswire::{Message, Name, RecordType};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "example.com".to_owned());
    let type_ = args.next().unwrap_or_else(|| "A".to_owned());
    let outfile = args.next().unwrap_or_else(|| "dns-message.bin".to_owned());

    let name: Name = name.parse().unwrap();
    let type_: RecordType = type_.parse().unwrap();

    let query = Message::query(name, type_);
    let bytes = query.to_bytes().unwrap();
    fs::write(&outfile, &bytes).unwrap();
    println!("wrote {} byte query to {}", bytes.len(), outfile);

    let parsed = Message::from_bytes(&bytes).unwrap();
    println!("{:#?}", parsed);
}
