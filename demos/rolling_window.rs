use dmxp_fanout::{FanoutBuilder, FanoutError};
use std::env;
use std::thread;
use std::time::Duration;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Optional TOML config path; otherwise a 256 byte rolling window.
    let builder = match env::args().nth(1) {
        Some(path) => FanoutBuilder::from_file(&path).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{path}: {e}"))
        })?,
        None => FanoutBuilder::new().with_limit(256),
    };
    let writer = builder.with_read_from_start(true).build();

    println!(
        "Rolling window: limit {} bytes, read_from_start {}",
        writer.limit(),
        writer.read_from_start()
    );

    thread::scope(|s| {
        for round in 0..4u64 {
            for line in 0..16 {
                let msg = format!("round {round} line {line}\n");
                writer.write(msg.as_bytes()).expect("rolling window never rejects");
            }

            // A late joiner sees the retained history, not the whole stream.
            let mut reader = writer.new_reader();
            s.spawn(move || {
                let mut buf = [0u8; 64];
                let mut seen = 0usize;
                loop {
                    match reader.read_timeout(&mut buf, Duration::from_millis(200)) {
                        Ok(Some(n)) => {
                            seen += n;
                            thread::sleep(Duration::from_millis(2));
                        }
                        Ok(None) => continue,
                        Err(FanoutError::EndOfStream) => break,
                        Err(e) => {
                            eprintln!("Reader {}: {}", reader.id(), e);
                            break;
                        }
                    }
                }
                println!(
                    "Reader {} joined after round {}: read {} bytes, lost {}",
                    reader.id(),
                    round,
                    seen,
                    reader.lost_bytes()
                );
            });

            thread::sleep(Duration::from_millis(10));
        }

        println!(
            "Writer: {} bytes written, {} retained",
            writer.end_offset(),
            writer.retained()
        );
        writer.close();
    });

    Ok(())
}
