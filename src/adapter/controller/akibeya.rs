use akibeya::adapter::gateway::room_repository::RoomRepository;
use akibeya::application::check_in_room::check_in_room;
use akibeya::application::check_out_room::check_out_room;
use akibeya::application::interface::RoomRepositoryTrait;
use akibeya::application::show_all_rooms::show_all_rooms;
use akibeya::application::show_available_now::show_available_now;
use akibeya::application::show_available_soon::show_available_soon;
use akibeya::application::show_study_tip::show_study_tip;
use akibeya::logger;
use chrono::Local;
use chrono::NaiveTime;
use regex::Regex;
use std::io::{stdin, stdout, Write};
use termion::style;

const DEFAULT_MINUTES_AHEAD: i64 = 30;

// 存在しないidなので、そのまま検索に回しても安全
const DEFAULT_ROOM_ID: i64 = -1;

// 整数に読めない入力は既定値で補って先に進む。
// 受け付けるのは32bitに収まる値まで
fn parse_int_or(text: &str, default_value: i64) -> i64 {
    match text.trim().parse::<i32>() {
        Ok(value) => i64::from(value),
        Err(_) => {
            println!("Invalid number. Using default {}", default_value);

            default_value
        }
    }
}

#[test]
fn test_parse_int_or_正常系() {
    let actual = parse_int_or("45", 30);
    let expected = 45;
    assert_eq!(actual, expected);
}

#[test]
fn test_parse_int_or_空白まじりでも読めること() {
    let actual = parse_int_or(" -7 ", 30);
    let expected = -7;
    assert_eq!(actual, expected);
}

#[test]
fn test_parse_int_or_読めない入力は既定値になること() {
    let actual = parse_int_or("abc", 30);
    let expected = 30;
    assert_eq!(actual, expected);
}

#[test]
fn test_parse_int_or_空文字は既定値になること() {
    let actual = parse_int_or("", -1);
    let expected = -1;
    assert_eq!(actual, expected);
}

#[test]
fn test_parse_int_or_32bitの上限値までは受け付けること() {
    let actual = parse_int_or("2147483647", 30);
    let expected = 2147483647;
    assert_eq!(actual, expected);
}

#[test]
fn test_parse_int_or_32bitに収まらない数は既定値になること() {
    let actual = parse_int_or("200000000000000", 30);
    let expected = 30;
    assert_eq!(actual, expected);
}

// 2番目のトークンがあればそれを引数として使い、なければ訊き直す
fn read_arg_or_prompt(tokens: &[&str], prompt: &str) -> String {
    if tokens.len() >= 2 {
        return tokens[1].to_string();
    }

    print!("{}", prompt);
    stdout().flush().unwrap();

    let mut buffer = String::from("");
    stdin().read_line(&mut buffer).unwrap();

    buffer.trim().to_string()
}

#[test]
fn test_read_arg_or_prompt_トークンがあれば訊き直さないこと() {
    let tokens = vec!["3", "45"];
    let actual = read_arg_or_prompt(&tokens, "unused: ");
    let expected = String::from("45");
    assert_eq!(actual, expected);
}

#[test]
fn test_read_arg_or_prompt_3番目以降のトークンは無視されること() {
    let tokens = vec!["4", "2", "9"];
    let actual = read_arg_or_prompt(&tokens, "unused: ");
    let expected = String::from("2");
    assert_eq!(actual, expected);
}

fn print_header(room_repository: &dyn RoomRepositoryTrait) {
    let now = Local::now();

    println!("========================================");
    println!(
        "  {}Akibeya - StudyRoom Finder{} - {}",
        style::Bold,
        style::Reset,
        now.format("%Y-%m-%d %H:%M")
    );
    println!(
        "  Total rooms created: {}",
        room_repository.get_total_rooms_created()
    );
    println!("========================================");
}

fn print_menu() {
    println!("1) List all rooms");
    println!("2) Show rooms available now");
    println!("3) Show rooms available soon");
    println!("4) Check in to a room");
    println!("5) Check out of a room");
    println!("6) Suggest a random study tip");
    println!("0) Exit");
}

// 1行ぶんの入力をさばく。falseを返したらループを抜ける
fn execute(
    room_repository: &mut dyn RoomRepositoryTrait,
    now: NaiveTime,
    untrimmed_line: &str,
) -> bool {
    // 整形
    let re = Regex::new(r"\s+").unwrap();
    let line: String = re
        .replace_all(untrimmed_line, " ")
        .to_string()
        .trim()
        .to_lowercase();

    let tokens: Vec<&str> = line.split(' ').collect();
    match tokens[0] {
        "1" | "全" | "all" | "ls" => {
            show_all_rooms(room_repository);
        }
        "2" | "今" | "now" => {
            show_available_now(room_repository, now);
        }
        "3" | "近" | "soon" => {
            let text =
                read_arg_or_prompt(&tokens, "Check availability within how many minutes? ");
            let minutes_ahead = parse_int_or(&text, DEFAULT_MINUTES_AHEAD);

            show_available_soon(room_repository, now, minutes_ahead);
        }
        "4" | "入" | "in" | "checkin" => {
            let text = read_arg_or_prompt(&tokens, "Enter room id to check in: ");
            let room_id = parse_int_or(&text, DEFAULT_ROOM_ID);

            check_in_room(room_repository, room_id, now);
        }
        "5" | "出" | "out" | "checkout" => {
            let text = read_arg_or_prompt(&tokens, "Enter room id to check out: ");
            let room_id = parse_int_or(&text, DEFAULT_ROOM_ID);

            check_out_room(room_repository, room_id);
        }
        "6" | "助" | "tip" => {
            show_study_tip(room_repository);
        }
        "0" | "終" | "quit" | "q" => {
            return false;
        }
        &_ => {
            println!("Invalid choice. Please try again.\n");
        }
    }

    true
}

fn main() {
    logger::init();

    let mut room_repository = RoomRepository::new();

    // 実体型に触るのはここまでにして、以降はトレイト越しに扱う
    application(&mut room_repository);
}

fn application(room_repository: &mut dyn RoomRepositoryTrait) {
    // 初期化
    room_repository.load_sample_data();
    log::info!("session started");

    loop {
        print_header(room_repository);
        print_menu();

        print!("Enter choice: ");
        stdout().flush().unwrap();

        let mut input = String::from("");
        let bytes = stdin().read_line(&mut input).unwrap();

        // EOFは終了の合図として扱う
        if bytes == 0 {
            break;
        }

        let now = Local::now().time();

        if !execute(room_repository, now, &input) {
            break;
        }
    }

    log::info!("session finished");
    println!("Goodbye. Happy studying!");
}
