use dmxp_fanout::{FanoutBuilder, FanoutWriter};
use sha2::{Digest, Sha256};
use std::io::{self, Read, Write};
use std::thread;

#[test]
fn read_to_end_stops_at_close() {
    let w = FanoutWriter::default();
    let mut r = w.new_reader();

    (&w).write_all(b"hello ").unwrap();
    (&w).write_all(b"world").unwrap();
    w.close();

    let mut out = Vec::new();
    r.read_to_end(&mut out).unwrap();
    assert_eq!(out, b"hello world");

    // EOF keeps reading as zero bytes.
    let mut rb = [0u8; 4];
    assert_eq!(Read::read(&mut r, &mut rb).unwrap(), 0);
}

#[test]
fn io_copy_through_readers_preserves_digest() {
    let data: Vec<u8> = (0..50_000u32).map(|i| (i % 251) as u8).collect();
    let expected = Sha256::digest(&data);

    let mut w = FanoutWriter::default();
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let mut r = w.new_reader();
            thread::spawn(move || {
                let mut hasher = Sha256::new();
                io::copy(&mut r, &mut hasher).unwrap();
                hasher.finalize()
            })
        })
        .collect();

    let mut src = &data[..];
    io::copy(&mut src, &mut w).unwrap();
    w.flush().unwrap();
    drop(w);

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn write_errors_map_to_io_kinds() {
    let w = FanoutBuilder::new().with_limit(2).build();
    let _r = w.new_reader();

    let err = Write::write(&mut &w, &[1, 2, 3]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::WouldBlock);

    w.close();
    let err = Write::write(&mut &w, &[1]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn fell_behind_surfaces_as_io_error() {
    let w = FanoutBuilder::new().with_limit(2).build();
    let mut r = w.new_reader();
    w.write(&[1, 2]).unwrap();
    w.write(&[3, 4]).unwrap();

    let mut out = Vec::new();
    let err = r.read_to_end(&mut out).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert!(err.to_string().contains("fell behind"));
}
