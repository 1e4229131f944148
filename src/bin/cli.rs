use chrono::{Local, NaiveDate};
use polars::prelude::{AnyValue, DataFrame, PolarsResult};
use std::io::{self, Write};
use study_planner::planner::{MAX_DAILY_HOURS, MAX_DAYS};
use study_planner::{
    PlanReport, PlanRequest, Planner, PlannerConfig, SchedulingOrder, export, format_hours,
    tables,
};
use tracing_subscriber::EnvFilter;

fn render_cell(av: &AnyValue) -> String {
    match av {
        AnyValue::Null => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::Float64(v) => format!("{v:.2}"),
        AnyValue::String(s) => s.to_string(),
        _ => av.to_string(),
    }
}

fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let row = columns
            .iter()
            .map(|col| col.get(row_idx).map(|av| render_cell(&av)).unwrap_or_default())
            .collect();
        rows.push(row);
    }

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.chars().count()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (ci, cell) in cells.iter().enumerate() {
            let pad = widths[ci].saturating_sub(cell.chars().count());
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&col_names));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_table(title: &str, table: PolarsResult<DataFrame>) {
    match table {
        Ok(df) => println!("{title}\n{}", render_df_as_text_table(&df)),
        Err(e) => println!("Error rendering {title}: {e}"),
    }
}

fn print_report(report: &PlanReport) {
    println!(
        "Study plan: {} topics, {} days x {} = {}",
        report.items.len(),
        report.days,
        format_hours(report.daily_hours),
        format_hours(report.total_hours)
    );
    print_table("Topics", tables::topic_table(report));
    print_table("Subjects", tables::subject_table(report));
    print_table("Day plan", tables::plan_table(report));

    for warning in &report.warnings {
        println!(
            "Warning: day {} has {} scheduled (budget {}).",
            warning.day_index,
            format_hours(warning.assigned_hours),
            format_hours(warning.capacity)
        );
    }
    println!(
        "Productivity score: {:.0}/100",
        report.insights.productivity_score
    );
    for advisory in &report.insights.advisories {
        println!("* {advisory}");
    }
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  add <Subject: Topic (difficulty), ...>\n                                     Add a declaration line\n  clear                              Remove all declarations\n  topics                             Show parsed topics\n  days <n>                           Set number of study days\n  hours <h>                          Set study hours per day\n  boost <subject> <0.5-2.0>          Set a subject's priority boost\n  auto <on|off>                      Toggle difficulty auto-detection\n  order <hard|declared>              Set scheduling order\n  start <YYYY-MM-DD>                 Set the first study date\n  generate                           Build the study plan\n  rebalance                          Build the plan with the rebalancer\n  simulate <days> <hours>            Try another time budget\n  show                               Show the last plan\n  export <text|topics|timeline|json> <path>\n                                     Export the last plan\n  quit|exit                          Exit"
    );
}

struct Session {
    planner: Planner,
    lines: Vec<String>,
    request: PlanRequest,
    report: Option<PlanReport>,
}

impl Session {
    fn new(planner: Planner) -> Self {
        let request = PlanRequest::new("", 10, 3.0).with_start_date(Local::now().date_naive());
        Self {
            planner,
            lines: Vec::new(),
            request,
            report: None,
        }
    }

    fn current_request(&self) -> PlanRequest {
        let mut request = self.request.clone();
        request.declarations = self.lines.join("\n");
        request
    }

    fn export(&self, kind: &str, path: &str) -> Result<(), String> {
        let Some(report) = &self.report else {
            return Err("No plan yet. Run 'generate' first.".into());
        };
        let result = match kind {
            "text" => export::save_text_plan(report, path),
            "topics" => export::save_topics_to_csv(report, path),
            "timeline" => {
                export::save_timeline_to_csv(report, self.planner.config().day_start_hour, path)
            }
            "json" => export::save_report_to_json(report, path),
            _ => return Err("Usage: export <text|topics|timeline|json> <path>".into()),
        };
        result.map_err(|e| e.to_string())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let planner = match PlannerConfig::from_env().and_then(Planner::new) {
        Ok(planner) => planner,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let mut session = Session::new(planner);

    println!("Study Planner (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
        let rest = rest.trim();
        let mut parts = rest.split_whitespace();

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "add" => {
                if rest.contains(':') {
                    session.lines.push(rest.to_string());
                    println!("Added: {rest}");
                } else {
                    println!("Usage: add <Subject: Topic (difficulty), ...>");
                }
            }
            "clear" => {
                session.lines.clear();
                session.report = None;
                println!("Cleared all declarations.");
            }
            "topics" => {
                let items = session.planner.parse(&session.current_request());
                if items.is_empty() {
                    println!("No topics declared.");
                }
                for (idx, item) in items.iter().enumerate() {
                    println!("{}. {}", idx + 1, item.label());
                }
            }
            "days" => match parts.next().and_then(|s| s.parse::<u32>().ok()) {
                Some(days) if (1..=MAX_DAYS).contains(&days) => {
                    session.request.days = days;
                    println!("Days set to {days}.");
                }
                _ => println!("Usage: days <n> (1 to {MAX_DAYS})"),
            },
            "hours" => match parts.next().and_then(|s| s.parse::<f64>().ok()) {
                Some(hours) if (0.0..=MAX_DAILY_HOURS).contains(&hours) => {
                    session.request.daily_hours = hours;
                    println!("Daily hours set to {}.", format_hours(hours));
                }
                _ => println!("Usage: hours <h> (0 to {MAX_DAILY_HOURS})"),
            },
            "boost" => {
                let Some((subject, value)) = rest.rsplit_once(char::is_whitespace) else {
                    println!("Usage: boost <subject> <0.5-2.0>");
                    continue;
                };
                match value.parse::<f64>() {
                    Ok(boost) if study_planner::item::is_valid_priority_boost(boost) => {
                        let subject = subject.trim().to_string();
                        println!("Boost for {subject} set to {boost}.");
                        session.request.priority_boosts.insert(subject, boost);
                    }
                    _ => println!("Boost must be a number between 0.5 and 2.0."),
                }
            }
            "auto" => match parts.next() {
                Some("on") => {
                    session.request.auto_detect = Some(true);
                    println!("Difficulty auto-detection on.");
                }
                Some("off") => {
                    session.request.auto_detect = Some(false);
                    println!("Difficulty auto-detection off.");
                }
                _ => println!("Usage: auto <on|off>"),
            },
            "order" => match parts.next().and_then(SchedulingOrder::from_str) {
                Some(order) => {
                    session.request.order = Some(order);
                    println!("Scheduling order set to {}.", order.as_str());
                }
                None => println!("Usage: order <hard|declared>"),
            },
            "start" => match parts
                .next()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            {
                Some(date) => {
                    session.request.start_date = Some(date);
                    println!("Start date set to {date}.");
                }
                None => println!("Usage: start <YYYY-MM-DD>"),
            },
            "generate" | "rebalance" => {
                let request = session.current_request();
                let result = if cmd == "generate" {
                    session.planner.generate(&request)
                } else {
                    session.planner.rebalance(&request)
                };
                match result {
                    Ok(report) => {
                        print_report(&report);
                        session.report = Some(report);
                    }
                    Err(e) => println!("Error: {e}"),
                }
            }
            "simulate" => {
                let days = parts.next().and_then(|s| s.parse::<u32>().ok());
                let hours = parts.next().and_then(|s| s.parse::<f64>().ok());
                match (days, hours) {
                    (Some(days), Some(hours)) => {
                        match session
                            .planner
                            .simulate(&session.current_request(), days, hours)
                        {
                            Ok(report) => {
                                println!("Simulation (current settings unchanged):");
                                print_report(&report);
                            }
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    _ => println!("Usage: simulate <days> <hours>"),
                }
            }
            "show" => match &session.report {
                Some(report) => print_report(report),
                None => println!("No plan yet. Run 'generate' first."),
            },
            "export" => match (parts.next(), parts.next()) {
                (Some(kind), Some(path)) => match session.export(kind, path) {
                    Ok(()) => println!("Exported {kind} to {path}"),
                    Err(e) => println!("Error: {e}"),
                },
                _ => println!("Usage: export <text|topics|timeline|json> <path>"),
            },
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
