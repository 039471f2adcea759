#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Minimal valid BMP 1x1 24-bit
    let mut bmp = vec![0u8; 58]; // 54 header + 4 pixel (3 + 1 padding)
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[54] = 0xff; // B
    bmp[55] = 0x00; // G
    bmp[56] = 0x00; // R
    fs::write(format!("{dir}/bmp_1x1.bmp"), &bmp).unwrap();

    // 2x2 with padded scanlines
    let mut bmp2 = bmp[..54].to_vec();
    bmp2[18..22].copy_from_slice(&2i32.to_le_bytes());
    bmp2[22..26].copy_from_slice(&2i32.to_le_bytes());
    bmp2.extend_from_slice(&[0, 0, 255, 0, 255, 0, 0, 0]);
    bmp2.extend_from_slice(&[255, 0, 0, 255, 255, 255, 0, 0]);
    fs::write(format!("{dir}/bmp_2x2.bmp"), &bmp2).unwrap();

    // Unsupported variants
    let mut bmp32 = bmp.clone();
    bmp32[28..30].copy_from_slice(&32u16.to_le_bytes());
    fs::write(format!("{dir}/bmp_32bpp.bmp"), &bmp32).unwrap();

    let mut rle = bmp.clone();
    rle[30..34].copy_from_slice(&1u32.to_le_bytes());
    fs::write(format!("{dir}/bmp_rle8.bmp"), &rle).unwrap();

    // Hostile headers
    let mut neg = bmp.clone();
    neg[22..26].copy_from_slice(&(-1i32).to_le_bytes());
    fs::write(format!("{dir}/bmp_negative_height.bmp"), &neg).unwrap();

    let mut huge = bmp.clone();
    huge[18..22].copy_from_slice(&i32::MAX.to_le_bytes());
    huge[22..26].copy_from_slice(&i32::MAX.to_le_bytes());
    fs::write(format!("{dir}/bmp_huge_dims.bmp"), &huge).unwrap();

    let mut far_offset = bmp.clone();
    far_offset[10..14].copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
    fs::write(format!("{dir}/bmp_offset_past_eof.bmp"), &far_offset).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_b.bin"), b"B").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/header_only.bin"), &bmp[..54]).unwrap();
    fs::write(format!("{dir}/not_bmp.bin"), b"P6\n1 1\n255\n\x00\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
