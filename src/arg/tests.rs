use super::{arg_extractor::*, arg_matcher::*, arg_parse_strategy::*, arg_parser::*, args::*};
use crate::core::types::{EntityType, EventIcon, Flag, ThemeColor};
use crate::errors::Error;

fn toks(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

// ---------- args.rs ----------
#[test]
fn token_stream_walks_tokens() {
    let raw = toks("one two");
    let mut ts = TokenStream::new(&raw);
    assert!(!ts.eof());
    assert_eq!(ts.peek().unwrap(), "one");
    assert_eq!(ts.next().unwrap(), "one");
    assert_eq!(ts.next().unwrap(), "two");
    assert!(ts.eof());
    assert!(ts.next().is_err());
}

#[test]
fn name_arg_requires_quotes_and_strips_them() {
    assert!(NameArg::accepts("\"Trip to Tokyo\""));
    assert!(NameArg::accepts("'Verjaardag'"));
    assert!(!NameArg::accepts("\"\""));
    assert!(!NameArg::accepts("\"open"));
    assert!(!NameArg::accepts("Bare"));
    assert_eq!(NameArg::new("'Koningsdag'").unwrap(), Arg::Name("Koningsdag".into()));
    assert!(NameArg::new("Bare").is_err());
}

#[test]
fn multi_token_name_joins_until_closing_quote() {
    let raw = toks("\"Trip to Tokyo\" 2030-01-01");
    let mut ts = TokenStream::new(&raw);
    let factory = MultiTokenFactory::<NameArg>::new();
    assert!(factory.can_start("\"Trip"));
    assert_eq!(factory.parse(&mut ts).unwrap(), Arg::Name("Trip to Tokyo".into()));
    assert_eq!(ts.peek().unwrap(), "2030-01-01");
}

#[test]
fn unterminated_name_is_an_error() {
    let raw = toks("\"Never closed");
    let mut ts = TokenStream::new(&raw);
    assert!(MultiTokenFactory::<NameArg>::new().parse(&mut ts).is_err());
}

#[test]
fn single_token_args_recognise_their_values() {
    assert_eq!(ColorArg::new("Emerald").unwrap(), Arg::Color(ThemeColor::Emerald));
    assert!(!ColorArg::accepts("teal"));
    assert_eq!(IconArg::new("cake").unwrap(), Arg::Icon(EventIcon::Cake));
    assert!(!IconArg::accepts("rocket"));
    assert_eq!(FlagArg::new("-y").unwrap(), Arg::Flag(Flag::Yes));
    assert_eq!(IntArg::new("3").unwrap(), Arg::Int(3));
    assert!(!IntArg::accepts(""));
    assert!(!IntArg::accepts("-3"));
    assert_eq!(
        EntityTypeArg::new("event").unwrap(),
        Arg::EntityType(EntityType::Event)
    );
    match DateArg::new("2030/01/05").unwrap() {
        Arg::Date(d) => assert_eq!(d.to_storage(), "2030-01-05"),
        other => panic!("expected date, got {other:?}"),
    }
}

// ---------- arg_parser.rs ----------
#[test]
fn parses_add_event_line() {
    let args = ArgParser::new()
        .parse(&toks("\"Trip to Tokyo\" 2030-01-01 cyan plane"))
        .unwrap();
    assert_eq!(args.len(), 4);
    assert_eq!(args[0], Arg::Name("Trip to Tokyo".into()));
    assert!(matches!(args[1], Arg::Date(_)));
    assert_eq!(args[2], Arg::Color(ThemeColor::Cyan));
    assert_eq!(args[3], Arg::Icon(EventIcon::Plane));
}

#[test]
fn parses_modify_line_with_position() {
    let args = ArgParser::new()
        .parse(&toks("event 2 \"Party\" 06-01"))
        .unwrap();
    assert_eq!(args[0], Arg::EntityType(EntityType::Event));
    assert_eq!(args[1], Arg::Int(2));
    assert!(matches!(args[3], Arg::Date(_)));
}

#[test]
fn unrecognized_token_suggests_quotes() {
    match ArgParser::new().parse(&toks("Trip 2030-01-01")) {
        Err(Error::Parse(msg)) => {
            assert!(msg.contains("'Trip'"));
            assert!(msg.contains("wrap it in quotes"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

// ---------- arg_parse_strategy.rs ----------
#[test]
fn free_text_parser_keeps_paths_whole() {
    let parser = CommandArgParser::new();
    let args = parser
        .parse("import", &toks("\"/tmp/my exports/file.json\""))
        .unwrap();
    assert_eq!(args, vec![Arg::Name("/tmp/my exports/file.json".into())]);

    let args = parser.parse("IMPORT", &toks("plain.json")).unwrap();
    assert_eq!(args, vec![Arg::Name("plain.json".into())]);

    assert_eq!(
        parser.parse("man", &toks("-h")).unwrap(),
        vec![Arg::Flag(Flag::Help)]
    );
    assert!(parser.parse("man", &[]).unwrap().is_empty());
}

#[test]
fn words_parser_accepts_bare_and_quoted_words() {
    let parser = CommandArgParser::new();
    let bare = parser.parse("config", &toks("DEFAULT_COLOR pink")).unwrap();
    let quoted = parser
        .parse("config", &toks("\"DEFAULT_COLOR\" \"pink\""))
        .unwrap();
    assert_eq!(bare, quoted);
    assert_eq!(bare[1], Arg::Name("pink".into()));
}

#[test]
fn other_commands_use_standard_parser() {
    let parser = CommandArgParser::new();
    assert_eq!(
        parser.parse("clear", &toks("-y")).unwrap(),
        vec![Arg::Flag(Flag::Yes)]
    );
    assert!(parser.parse("event", &toks("bare")).is_err());
}

// ---------- arg_matcher.rs / arg_extractor.rs ----------
#[test]
fn matchers_identify_variants() {
    assert!(NameArg::matches_variant(&Arg::Name("x".into())));
    assert!(!IntArg::matches_variant(&Arg::Name("x".into())));
    assert!(ColorArg::matches_variant(&Arg::Color(ThemeColor::Blue)));
    match DateArg::expected_error(&Arg::Int(1)) {
        Error::Parse(msg) => assert!(msg.contains("Expected a date")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn extractors_return_typed_values_or_errors() {
    let args = vec![
        Arg::EntityType(EntityType::Event),
        Arg::Int(4),
        Arg::Name("Trip".into()),
        Arg::Color(ThemeColor::Pink),
    ];
    assert_eq!(extract_at::<IntArg>(&args, 1).unwrap(), 4);
    assert_eq!(extract_at::<NameArg>(&args, 2).unwrap(), "Trip");
    assert_eq!(extract_opt::<ColorArg>(&args, 3).unwrap(), Some(ThemeColor::Pink));
    assert_eq!(extract_opt::<IconArg>(&args, 4).unwrap(), None);

    assert!(matches!(extract_at::<DateArg>(&args, 2), Err(Error::Parse(_))));
    assert!(matches!(extract_at::<NameArg>(&args, 9), Err(Error::Parse(_))));
    assert!(extract_opt::<IconArg>(&args, 3).is_err());
}
