#[cfg(test)]
mod framer_tests {
    use crate::{
        error::{audit::AuditError, warning::DecodeWarning},
        record::{
            framer::{EventFramer, Framed},
            tests::builder::{header32, record, record_raw, trailer, HEADER32_SIZE},
            BoundaryPolicy, Event, EventStatus,
        },
        tokens::{
            header::{Trailer, AUT_TRAILER_MAGIC},
            Token,
        },
        util::{cursor::ByteCursor, text::AuditText},
    };

    fn frame(bytes: &[u8], policy: BoundaryPolicy) -> (Event, usize) {
        let mut cursor = ByteCursor::new(bytes);
        match EventFramer::new(policy).frame(&mut cursor, 1).unwrap() {
            Framed::Event(event) => (event, cursor.offset()),
            Framed::Interrupted(_, why) => panic!("Record was interrupted: {why}"),
        }
    }

    #[test]
    fn can_frame_at_declared_end() {
        let bytes = [record(1, &[Token::Text("one".into())]), vec![0xff; 4]].concat();
        let (event, offset) = frame(&bytes, BoundaryPolicy::DeclaredLength);

        assert!(event.is_complete());
        assert_eq!(offset, bytes.len() - 4);
        assert_eq!(event.end_offset, offset);
    }

    #[test]
    fn can_warn_unsupported_version() {
        let mut bytes = record(1, &[]);
        // Version byte follows the tag and the length
        bytes[5] = 10;
        let (event, _) = frame(&bytes, BoundaryPolicy::DeclaredLength);

        assert!(event.is_complete());
        assert_eq!(event.warnings, vec![DecodeWarning::UnsupportedVersion(10)]);
    }

    #[test]
    fn can_warn_bad_trailer_magic() {
        let bytes = [
            Token::Header(header32(1, 25)).to_bytes(),
            Token::Trailer(Trailer {
                magic: 0xb106,
                record_length: 25,
            })
            .to_bytes(),
        ]
        .concat();
        let (event, _) = frame(&bytes, BoundaryPolicy::DeclaredLength);

        assert!(event.is_complete());
        assert_eq!(
            event.warnings,
            vec![DecodeWarning::BadTrailerMagic {
                magic: 0xb106,
                offset: HEADER32_SIZE
            }]
        );
        assert_ne!(event.trailer().unwrap().magic, AUT_TRAILER_MAGIC);
    }

    #[test]
    fn can_warn_unknown_data_type() {
        let bytes = record_raw(1, &[0x21, 0x00, 0x09, 0x01, 0x00]);
        let (event, offset) = frame(&bytes, BoundaryPolicy::DeclaredLength);

        assert_eq!(event.status, EventStatus::Truncated);
        assert!(event.tokens.is_empty());
        assert_eq!(
            event.warnings,
            vec![DecodeWarning::UnknownDataType {
                element_type: 9,
                offset: HEADER32_SIZE
            }]
        );
        assert_eq!(offset, bytes.len());
    }

    #[test]
    fn can_warn_text_decode() {
        let bytes = record_raw(1, &[0x28, 0x00, 0x03, 0xff, b'a', 0x00]);
        let (event, _) = frame(&bytes, BoundaryPolicy::DeclaredLength);

        assert!(event.is_complete());
        assert_eq!(
            event.tokens[0],
            Token::Text(AuditText {
                value: "\u{FFFD}a".to_string(),
                repaired: true
            })
        );
        assert_eq!(
            event.warnings,
            vec![DecodeWarning::TextDecode {
                offset: HEADER32_SIZE
            }]
        );
    }

    #[test]
    fn can_seek_back_when_length_ends_in_header() {
        let bytes = [
            Token::Header(header32(1, 10)).to_bytes(),
            trailer(25).to_bytes(),
        ]
        .concat();
        let (event, offset) = frame(&bytes, BoundaryPolicy::DeclaredLength);

        assert_eq!(event.status, EventStatus::Overrun);
        assert!(event.tokens.is_empty());
        assert_eq!(offset, 10);
        assert_eq!(
            event.warnings,
            vec![DecodeWarning::BoundaryOverrun {
                offset: HEADER32_SIZE,
                end: 10
            }]
        );
    }

    #[test]
    fn can_keep_tokens_when_interrupted() {
        let bytes = record(1, &[Token::Path("/tmp".into()), Token::Text("cut".into())]);
        let cut = &bytes[..bytes.len() - 10];
        let mut cursor = ByteCursor::new(cut);

        match EventFramer::new(BoundaryPolicy::DeclaredLength)
            .frame(&mut cursor, 1)
            .unwrap()
        {
            Framed::Interrupted(event, why) => {
                assert_eq!(event.status, EventStatus::Truncated);
                assert_eq!(event.tokens, vec![Token::Path("/tmp".into())]);
                assert!(matches!(why, AuditError::TruncatedStream(_)));
            }
            Framed::Event(_) => panic!("Record should have been interrupted"),
        }
    }

    #[test]
    fn cant_frame_without_header() {
        let bytes = trailer(7).to_bytes();
        let mut cursor = ByteCursor::new(&bytes);

        assert!(matches!(
            EventFramer::default().frame(&mut cursor, 1),
            Err(AuditError::InvalidHeaderTag(0x13, 0))
        ));
    }
}
