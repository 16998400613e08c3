#[cfg(test)]
mod trail_tests {
    use std::env::current_dir;
    use std::fs::read;
    use std::net::Ipv4Addr;

    use crate::{
        error::{audit::AuditError, cursor::CursorError, warning::DecodeWarning},
        record::{
            tests::builder::{body, decode_all, header32, record, record_raw, trailer, HEADER32_SIZE},
            trail::AuditTrail,
            BoundaryPolicy, EventStatus,
        },
        tables::events::EventCatalog,
        tokens::{
            address::NetAddress,
            process::{Argument, Return},
            subject::{Identity, Subject},
            Token,
        },
    };

    fn subject() -> Token {
        Token::Subject32(Subject {
            identity: Identity {
                audit_uid: 501,
                effective_uid: 0,
                effective_gid: 20,
                real_uid: 501,
                real_gid: 20,
                pid: 4242,
                session_id: 100007,
            },
            port: 0,
            address: NetAddress::IPv4(Ipv4Addr::UNSPECIFIED),
        })
    }

    fn success() -> Token {
        Token::Return32(Return {
            status: 0,
            value: 0,
        })
    }

    #[test]
    fn can_decode_back_to_back_events() {
        let records = [
            record(23, &[Token::Path("/bin/ls".into()), subject(), success()]),
            record(3, &[Token::Path("/etc/passwd".into()), success()]),
            record(42, &[Token::Text("moved".into())]),
        ];
        let bytes = records.concat();

        let events = decode_all(&bytes, BoundaryPolicy::DeclaredLength);
        assert_eq!(events.len(), 3);

        let mut offset = 0;
        for (idx, (event, (event_type, tokens))) in events
            .iter()
            .zip([(23, 4), (3, 3), (42, 2)])
            .enumerate()
        {
            let event = event.as_ref().unwrap();
            assert_eq!(event.number, idx + 1);
            assert_eq!(event.offset, offset);
            assert_eq!(event.header.event_type, event_type);
            assert_eq!(event.tokens.len(), tokens);
            assert_eq!(event.status, EventStatus::Complete);
            assert!(event.warnings.is_empty());
            offset += records[idx].len();
            assert_eq!(event.end_offset, offset);
        }
    }

    #[test]
    fn can_decode_event_without_body() {
        let bytes = record(45, &[]);
        let events = decode_all(&bytes, BoundaryPolicy::DeclaredLength);

        assert_eq!(events.len(), 1);
        let event = events[0].as_ref().unwrap();
        assert_eq!(event.header.length, 25);
        assert_eq!(event.tokens, vec![trailer(25)]);
        assert!(event.warnings.is_empty());
        assert!(event.is_complete());
        assert_eq!(event.trailer().unwrap().record_length, 25);
    }

    #[test]
    fn can_resume_after_unknown_token() {
        let known = [
            subject(),
            Token::Text("abc".into()),
            Token::Arg32(Argument {
                index: 1,
                value: 2,
                name: "fd".into(),
            }),
        ];
        let mut first_body = body(&known);
        let unknown_offset = HEADER32_SIZE + first_body.len();
        first_body.extend_from_slice(&[0x01, 0xde, 0xad]);

        let first = record_raw(1, &first_body);
        let second = record(2, &[success()]);
        let bytes = [first.clone(), second].concat();

        let events = decode_all(&bytes, BoundaryPolicy::DeclaredLength);
        assert_eq!(events.len(), 2);

        let event = events[0].as_ref().unwrap();
        assert_eq!(event.status, EventStatus::Truncated);
        assert_eq!(event.tokens, known.to_vec());
        assert_eq!(
            event.warnings,
            vec![DecodeWarning::UnknownToken {
                tag: 0x01,
                offset: unknown_offset
            }]
        );

        let event = events[1].as_ref().unwrap();
        assert_eq!(event.number, 2);
        assert_eq!(event.offset, first.len());
        assert_eq!(event.header.event_type, 2);
        assert_eq!(event.tokens, vec![success(), trailer(31)]);
        assert!(event.warnings.is_empty());
    }

    #[test]
    fn can_yield_events_before_truncation() {
        let third = record(3, &[Token::Text("truncated".into())]);
        let bytes = [
            record(1, &[success()]),
            record(2, &[success()]),
            third[..HEADER32_SIZE + 5].to_vec(),
        ]
        .concat();

        let mut trail = AuditTrail::new(&bytes, BoundaryPolicy::DeclaredLength).unwrap();
        assert!(trail.next().unwrap().unwrap().is_complete());
        assert!(trail.next().unwrap().unwrap().is_complete());

        let partial = trail.next().unwrap().unwrap();
        assert_eq!(partial.number, 3);
        assert_eq!(partial.status, EventStatus::Truncated);
        assert!(partial.tokens.is_empty());

        let error = trail.next().unwrap().unwrap_err();
        assert_eq!(
            error,
            AuditError::TruncatedStream(CursorError::OutOfBounds(
                bytes.len() - 2,
                10,
                bytes.len()
            ))
        );
        assert!(!error.is_fatal());
        assert!(trail.next().is_none());
    }

    #[test]
    fn can_stop_in_truncated_header() {
        let first = record(1, &[success()]);
        let bytes = [first.clone(), record(2, &[success()])[..10].to_vec()].concat();

        let events = decode_all(&bytes, BoundaryPolicy::DeclaredLength);
        assert_eq!(events.len(), 2);
        assert!(events[0].is_ok());
        assert!(matches!(events[1], Err(AuditError::TruncatedStream(_))));
    }

    #[test]
    fn cant_decode_zero_length() {
        let bytes = [
            Token::Header(header32(1, 0)).to_bytes(),
            trailer(25).to_bytes(),
        ]
        .concat();

        let mut trail = AuditTrail::new(&bytes, BoundaryPolicy::DeclaredLength).unwrap();
        let error = trail.next().unwrap().unwrap_err();
        assert_eq!(error, AuditError::ZeroLength(0));
        assert!(error.is_fatal());
        assert!(trail.next().is_none());
    }

    #[test]
    fn cant_decode_zero_length_after_first_record() {
        let first = record(1, &[]);
        let bytes = [
            first.clone(),
            Token::Header(header32(2, 0)).to_bytes(),
            trailer(25).to_bytes(),
        ]
        .concat();

        let events = decode_all(&bytes, BoundaryPolicy::DeclaredLength);
        assert_eq!(events.len(), 2);
        assert!(events[0].is_ok());
        assert_eq!(events[1], Err(AuditError::ZeroLength(first.len())));
    }

    #[test]
    fn cant_decode_without_header() {
        let bytes = Token::Text("hello".into()).to_bytes();
        assert_eq!(
            AuditTrail::new(&bytes, BoundaryPolicy::DeclaredLength).unwrap_err(),
            AuditError::InvalidHeaderTag(0x28, 0)
        );
    }

    #[test]
    fn cant_decode_empty_source() {
        assert!(matches!(
            AuditTrail::new(&[], BoundaryPolicy::DeclaredLength),
            Err(AuditError::TruncatedStream(_))
        ));
    }

    #[test]
    fn can_realign_after_overrun() {
        // The declared length ends inside the text token
        let first = [
            Token::Header(header32(1, 21)).to_bytes(),
            Token::Text("hello".into()).to_bytes(),
            trailer(34).to_bytes(),
        ]
        .concat();
        let bytes = [first.clone(), record(2, &[success()])].concat();

        let events = decode_all(&bytes, BoundaryPolicy::DeclaredLength);
        assert_eq!(events.len(), 2);

        let event = events[0].as_ref().unwrap();
        assert_eq!(event.status, EventStatus::Overrun);
        assert_eq!(event.tokens, vec![Token::Text("hello".into())]);
        assert_eq!(event.end_offset, 21);
        assert_eq!(
            event.warnings,
            vec![DecodeWarning::BoundaryOverrun {
                offset: 27,
                end: 21
            }]
        );

        let event = events[1].as_ref().unwrap();
        assert_eq!(event.offset, first.len());
        assert!(event.is_complete());
        assert_eq!(
            event.warnings,
            vec![DecodeWarning::MisalignedRecord {
                tag: b'h',
                offset: 21
            }]
        );
    }

    #[test]
    fn can_use_trailer_boundaries() {
        let records: Vec<Vec<u8>> = [10, 11]
            .iter()
            .map(|event_type| {
                [
                    Token::Header(header32(*event_type, 200)).to_bytes(),
                    success().to_bytes(),
                    trailer(31).to_bytes(),
                ]
                .concat()
            })
            .collect();
        let bytes = records.concat();

        let events = decode_all(&bytes, BoundaryPolicy::Trailer);
        assert_eq!(events.len(), 2);
        for (idx, event) in events.iter().enumerate() {
            let event = event.as_ref().unwrap();
            assert!(event.is_complete());
            assert_eq!(event.offset, idx * 31);
            assert_eq!(event.end_offset, (idx + 1) * 31);
            assert_eq!(
                event.warnings,
                vec![DecodeWarning::TrailerLengthMismatch {
                    declared: 200,
                    trailer: 31
                }]
            );
        }

        // By their declared lengths the first record runs into the second
        let events = decode_all(&bytes, BoundaryPolicy::DeclaredLength);
        assert_eq!(events.len(), 3);

        let event = events[0].as_ref().unwrap();
        assert_eq!(event.status, EventStatus::Overrun);
        assert_eq!(event.end_offset, 31);
        assert_eq!(
            event.warnings,
            vec![
                DecodeWarning::TrailerLengthMismatch {
                    declared: 200,
                    trailer: 31
                },
                DecodeWarning::BoundaryOverrun {
                    offset: 31,
                    end: 200
                }
            ]
        );

        let event = events[1].as_ref().unwrap();
        assert_eq!(event.offset, 31);
        assert_eq!(event.header.event_type, 11);
        assert_eq!(event.status, EventStatus::Truncated);
        assert!(matches!(events[2], Err(AuditError::TruncatedStream(_))));
    }

    #[test]
    fn can_keep_record_after_long_declared_length() {
        // Declares 34 bytes but the next header starts at 31
        let first = [
            Token::Header(header32(1, 34)).to_bytes(),
            success().to_bytes(),
            trailer(34).to_bytes(),
        ]
        .concat();
        assert_eq!(first.len(), 31);
        let bytes = [first, record(2, &[success()]), record(3, &[success()])].concat();

        let events = decode_all(&bytes, BoundaryPolicy::DeclaredLength);
        assert_eq!(events.len(), 3);

        let event = events[0].as_ref().unwrap();
        assert_eq!(event.status, EventStatus::Overrun);
        assert_eq!(event.end_offset, 31);
        assert_eq!(event.tokens, vec![success(), trailer(34)]);
        assert_eq!(
            event.warnings,
            vec![DecodeWarning::BoundaryOverrun {
                offset: 31,
                end: 34
            }]
        );

        let event = events[1].as_ref().unwrap();
        assert_eq!(event.offset, 31);
        assert_eq!(event.header.event_type, 2);
        assert!(event.is_complete());
        assert!(event.warnings.is_empty());

        let event = events[2].as_ref().unwrap();
        assert_eq!(event.header.event_type, 3);
        assert!(event.is_complete());
    }

    #[test]
    fn can_keep_warning_when_realign_hits_end() {
        let first = record(1, &[]);
        let bytes = [first.clone(), vec![0; 4]].concat();

        let mut trail = AuditTrail::new(&bytes, BoundaryPolicy::DeclaredLength).unwrap();
        let items: Vec<_> = trail.by_ref().collect();
        assert_eq!(items.len(), 2);

        let event = items[0].as_ref().unwrap();
        assert!(event.is_complete());
        assert!(event.warnings.is_empty());
        assert!(matches!(items[1], Err(AuditError::TruncatedStream(_))));
        assert_eq!(
            trail.unattached_warnings(),
            &[DecodeWarning::MisalignedRecord {
                tag: 0,
                offset: first.len()
            }]
        );
    }

    #[test]
    fn can_scan_to_trailer_after_unknown_token() {
        let mut first_body = Token::Text("abc".into()).to_bytes();
        first_body.extend_from_slice(&[0x01, 0x02, 0x03]);
        let first = record_raw(1, &first_body);
        let bytes = [first.clone(), record(2, &[])].concat();

        let events = decode_all(&bytes, BoundaryPolicy::Trailer);
        assert_eq!(events.len(), 2);

        let event = events[0].as_ref().unwrap();
        assert_eq!(event.status, EventStatus::Truncated);
        assert_eq!(event.tokens, vec![Token::Text("abc".into())]);
        assert_eq!(event.end_offset, first.len());
        assert!(events[1].as_ref().unwrap().is_complete());
    }

    #[test]
    fn can_end_event_at_next_header() {
        let first = [
            Token::Header(header32(1, 25)).to_bytes(),
            Token::Text("abc".into()).to_bytes(),
        ]
        .concat();
        let bytes = [first.clone(), record(2, &[])].concat();

        let events = decode_all(&bytes, BoundaryPolicy::Trailer);
        assert_eq!(events.len(), 2);

        let event = events[0].as_ref().unwrap();
        assert_eq!(event.status, EventStatus::Truncated);
        assert_eq!(event.end_offset, first.len());
        assert_eq!(events[1].as_ref().unwrap().offset, first.len());
    }

    #[test]
    fn can_decode_fixture() {
        let trail_path = current_dir()
            .unwrap()
            .as_path()
            .join("test_data/audit_trail.bsm");
        let bytes = read(trail_path).unwrap();
        let catalog = EventCatalog::builtin();

        let events: Vec<_> = AuditTrail::new(&bytes, BoundaryPolicy::DeclaredLength)
            .unwrap()
            .map(Result::unwrap)
            .collect();

        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|event| event.is_complete()));
        assert!(events.iter().all(|event| event.warnings.is_empty()));

        let names: Vec<&str> = events
            .iter()
            .map(|event| catalog.name(event.header.event_type))
            .collect();
        assert_eq!(names, vec!["AUE_EXECVE", "AUE_CONNECT", "AUE_auth_user"]);

        assert_eq!(
            events[0].tokens[0],
            Token::ExecArgs(vec!["ls".into(), "-la".into()])
        );
        assert_eq!(
            events[1].header.address(),
            Some(&NetAddress::IPv4(Ipv4Addr::new(10, 0, 0, 1)))
        );
        assert_eq!(events[2].offset, 244);
        assert_eq!(events[2].end_offset, bytes.len());
    }
}
