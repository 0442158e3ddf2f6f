use bitstride::buffer::BitBuffer;
use bitstride::cursor::Cursor;
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_buffer(byte_len: usize) -> BitBuffer {
    let mut buffer = BitBuffer::new(byte_len).unwrap();

    // Deterministic but non-trivial pattern
    for i in 0..byte_len {
        buffer.set_byte(i, (i * 31 % 256) as u8).unwrap();
    }

    buffer
}

fn bench_field_access(c: &mut Criterion) {
    for &byte_len in &[16usize, 256, 4096] {
        let mut buffer = gen_buffer(byte_len);
        let last = buffer.bit_len() - 8;

        c.bench_function(&format!("set_bits_{}_bytes", byte_len), |b| {
            b.iter(|| {
                for bit_pos in (0..last).step_by(5) {
                    buffer.set_bits(bit_pos, 5, 0x15).unwrap();
                }
            })
        });

        let buffer = gen_buffer(byte_len);
        c.bench_function(&format!("get_bits_{}_bytes", byte_len), |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for bit_pos in (0..last).step_by(5) {
                    acc = acc.wrapping_add(buffer.get_bits(bit_pos, 5).unwrap() as u64);
                }
                acc
            })
        });
    }
}

fn bench_cursor_walk(c: &mut Criterion) {
    for &byte_len in &[256usize, 4096] {
        let mut buffer = gen_buffer(byte_len);
        let steps = buffer.bit_len() / 3;

        c.bench_function(&format!("walk_read_{}_bytes", byte_len), |b| {
            b.iter(|| {
                let mut cursor = Cursor::new(&mut buffer);
                cursor.set_stride(3).unwrap();

                let mut acc = 0u64;
                for _ in 0..steps {
                    acc = acc.wrapping_add(cursor.read() as u64);
                }
                acc
            })
        });
    }
}

criterion_group!(benches, bench_field_access, bench_cursor_walk);
criterion_main!(benches);
