use std::io::Write;

use proptest::prelude::*;

use lease2zone::{render, LeaseStore, LEASE_RECORD_SIZE, WRITE_TIME_SIZE};

fn load_from_bytes(contents: &[u8]) -> lease2zone::Result<LeaseStore> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    LeaseStore::load(file.path())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn load_never_panics_on_arbitrary_bytes(contents in prop::collection::vec(any::<u8>(), 0..2048)) {
        let _ = load_from_bytes(&contents);
    }

    #[test]
    fn load_accepts_exactly_the_well_sized_files(size in 0usize..2048) {
        let result = load_from_bytes(&vec![0u8; size]);
        let well_sized = size >= WRITE_TIME_SIZE && (size - WRITE_TIME_SIZE) % LEASE_RECORD_SIZE == 0;
        prop_assert_eq!(result.is_ok(), well_sized);
        if let Ok(store) = result {
            prop_assert_eq!(store.record_count(), (size - WRITE_TIME_SIZE) / LEASE_RECORD_SIZE);
        }
    }

    #[test]
    fn record_fields_echo_input_bytes(
        header in prop::collection::vec(any::<u8>(), WRITE_TIME_SIZE..=WRITE_TIME_SIZE),
        records in prop::collection::vec(prop::collection::vec(any::<u8>(), LEASE_RECORD_SIZE..=LEASE_RECORD_SIZE), 0..16),
    ) {
        let mut contents = header;
        for record in &records {
            contents.extend_from_slice(record);
        }
        let store = load_from_bytes(&contents).unwrap();
        prop_assert_eq!(store.record_count(), records.len());

        for (index, raw) in records.iter().enumerate() {
            let record = store.record_at(index).unwrap();
            prop_assert_eq!(
                record.expire_time(),
                u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])
            );
            prop_assert_eq!(record.ip_octets(), [raw[4], raw[5], raw[6], raw[7]]);
            prop_assert_eq!(record.mac(), [raw[8], raw[9], raw[10], raw[11], raw[12], raw[13]]);

            let hostname_field = &raw[14..34];
            let expected_len = hostname_field
                .iter()
                .position(|&byte| byte == 0)
                .unwrap_or(20);
            prop_assert_eq!(record.hostname_bytes(), &hostname_field[..expected_len]);
        }
    }

    #[test]
    fn render_never_panics_on_arbitrary_records(
        records in prop::collection::vec(prop::collection::vec(any::<u8>(), LEASE_RECORD_SIZE..=LEASE_RECORD_SIZE), 0..16),
    ) {
        let mut contents = vec![0u8; WRITE_TIME_SIZE];
        for record in &records {
            contents.extend_from_slice(record);
        }
        let store = load_from_bytes(&contents).unwrap();

        let mut forward = Vec::new();
        let mut reverse = Vec::new();
        render(&store, &mut forward, &mut reverse).unwrap();

        // One line per record in each sink, whatever the hostname held.
        prop_assert_eq!(forward.iter().filter(|&&byte| byte == b'\n').count() >= records.len(), true);
        prop_assert_eq!(reverse.iter().filter(|&&byte| byte == b'\n').count() >= records.len(), true);
    }
}
