// In demos/broadcast.rs
use dmxp_fanout::{FanoutError, FanoutWriter};
use sha2::{Digest, Sha256};
use std::env;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <num_chunks> [num_readers]", args[0]);
        std::process::exit(1);
    }

    let num_chunks: usize = args[1].parse().expect("Invalid number of chunks");
    let num_readers: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3);

    let writer = Arc::new(FanoutWriter::default());

    // Handle Ctrl+C by closing the stream; readers drain and exit.
    let writer_for_handler = Arc::clone(&writer);
    ctrlc::set_handler(move || {
        writer_for_handler.close();
    })
    .expect("Error setting Ctrl+C handler");

    let handles: Vec<_> = (0..num_readers)
        .map(|i| {
            let mut reader = writer.new_reader();
            // Each reader uses a different chunk size and pace.
            let chunk = 64 << i;
            let pause = Duration::from_micros(50 * i as u64);
            thread::spawn(move || {
                let mut hasher = Sha256::new();
                let mut buf = vec![0u8; chunk];
                let mut total = 0usize;
                loop {
                    match reader.read(&mut buf) {
                        Ok(n) => {
                            hasher.update(&buf[..n]);
                            total += n;
                            thread::sleep(pause);
                        }
                        Err(FanoutError::EndOfStream) => break,
                        Err(e) => {
                            eprintln!("Reader {}: {}", i, e);
                            break;
                        }
                    }
                }
                (i, total, format!("{:x}", hasher.finalize()))
            })
        })
        .collect();

    println!(
        "Writer: streaming {} chunks to {} readers...",
        num_chunks, num_readers
    );

    let start = Instant::now();
    let mut expected = Sha256::new();
    let mut sent = 0usize;

    for i in 0..num_chunks {
        let chunk = format!("chunk_{}:{:x}\n", i, Sha256::digest(i.to_le_bytes()));
        match writer.write(chunk.as_bytes()) {
            Ok(n) => {
                expected.update(chunk.as_bytes());
                sent += n;
            }
            Err(FanoutError::Closed) => {
                println!("Writer: interrupted after {} chunks", i);
                break;
            }
            Err(e) => {
                eprintln!("Writer: failed to write chunk {}: {}", i, e);
                break;
            }
        }
    }
    writer.close();

    let elapsed = start.elapsed();
    println!("Writer: wrote {} bytes in {:.2?}", sent, elapsed);

    let expected = format!("{:x}", expected.finalize());
    let mut all_ok = true;
    for h in handles {
        let (i, total, digest) = h.join().expect("reader thread panicked");
        let ok = digest == expected;
        all_ok &= ok;
        println!(
            "Reader {}: {} bytes, digest {} {}",
            i,
            total,
            &digest[..16],
            if ok { "OK" } else { "MISMATCH" }
        );
    }

    if all_ok {
        println!("All readers received the identical stream");
    }
    Ok(())
}
