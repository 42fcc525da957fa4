//! Block writer and read-back verification tests

mod common;

use arctic_imager::{verify_image, write_image, Component, ImageError, Layout, Stage};
use common::{MemoryBlockDevice, SECTOR};
use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};

const BS: BlockSize = BlockSize::BS_512;

fn components() -> Vec<Component> {
    vec![
        Component::from_bytes(Stage::Bootloader, "boot.bin", vec![0xAA; 510], BS),
        Component::from_bytes(Stage::Loader, "osload.bin", vec![0xBB; 512], BS),
        Component::from_bytes(Stage::Payload, "rekanto.bin", vec![0xCC; 600], BS),
    ]
}

#[test]
fn test_write_zeroes_stale_device_contents() {
    let components = components();
    let layout = Layout::plan(&components, BS, 16 * SECTOR as u64).unwrap();
    let mut device = MemoryBlockDevice::filled(16, 0xFF);

    write_image(&mut device, &layout, &components).expect("write should succeed");

    let data = &device.data;
    assert!(data[..510].iter().all(|&b| b == 0xAA));
    assert_eq!(&data[510..512], &[0, 0]);
    assert!(data[512..1024].iter().all(|&b| b == 0xBB));
    assert!(data[1024..1624].iter().all(|&b| b == 0xCC));
    assert!(data[1624..].iter().all(|&b| b == 0), "unused sectors must be zero");
}

#[test]
fn test_zero_fill_is_chunked() {
    let components = components();
    let layout = Layout::plan(&components, BS, 2880 * SECTOR as u64).unwrap();
    let mut device = MemoryBlockDevice::filled(2880, 0);

    write_image(&mut device, &layout, &components).unwrap();

    // 2880 / 36 zero chunks + 3 stages
    assert_eq!(device.writes, 80 + 3);
}

#[test]
fn test_write_past_device_end_fails() {
    let components = components();
    let layout = Layout::plan(&components, BS, 16 * SECTOR as u64).unwrap();
    let mut device = MemoryBlockDevice::filled(4, 0);

    let err = write_image(&mut device, &layout, &components).unwrap_err();
    assert!(matches!(err, ImageError::Device { lba: 0, .. }), "got {err:?}");
}

#[test]
fn test_write_rejects_foreign_components() {
    let components = components();
    let layout = Layout::plan(&components, BS, 16 * SECTOR as u64).unwrap();
    let mut device = MemoryBlockDevice::filled(16, 0);

    let err = write_image(&mut device, &layout, &components[..2]).unwrap_err();
    assert!(matches!(err, ImageError::LayoutMismatch { planned: 3, given: 2 }));
    assert_eq!(device.writes, 0);
}

#[test]
fn test_verify_accepts_written_image() {
    let components = components();
    let layout = Layout::plan(&components, BS, 16 * SECTOR as u64).unwrap();
    let mut device = MemoryBlockDevice::filled(16, 0);

    write_image(&mut device, &layout, &components).unwrap();
    verify_image(&mut device, &layout, &components).expect("verify should succeed");
}

#[test]
fn test_verify_detects_corruption() {
    let components = components();
    let layout = Layout::plan(&components, BS, 16 * SECTOR as u64).unwrap();
    let mut device = MemoryBlockDevice::filled(16, 0);
    write_image(&mut device, &layout, &components).unwrap();

    let mut sector = [0u8; SECTOR];
    device.read_blocks(Lba(2), &mut sector).unwrap();
    sector[7] ^= 0xFF;
    device.write_blocks(Lba(2), &sector).unwrap();

    let err = verify_image(&mut device, &layout, &components).unwrap_err();
    assert!(matches!(
        err,
        ImageError::VerifyMismatch { stage: Stage::Payload, lba: 2 }
    ));
}

#[test]
fn test_verify_detects_short_device() {
    let components = components();
    let layout = Layout::plan(&components, BS, 16 * SECTOR as u64).unwrap();
    let mut device = MemoryBlockDevice::filled(8, 0);

    let err = verify_image(&mut device, &layout, &components).unwrap_err();
    assert!(matches!(err, ImageError::SizeMismatch { expected: 16, actual: 8 }));
}
