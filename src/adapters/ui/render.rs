//! Plain terminal rendering of the dashboard view-model.
//!
//! Writes to any `Write` so the layout can be checked in tests; colors are
//! crossterm escape sequences.

use crate::domain::{AlertStatus, CompanyCard, DashboardView, JobStatus, RecentJob};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use rust_decimal::Decimal;
use std::io::{self, Write};

/// `$` amount with thousands separators. Whole amounts have no decimals;
/// anything else shows exactly two: `$500`, `$12,345.50`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = if rounded.fract().is_zero() {
        rounded.abs().trunc().to_string()
    } else {
        format!("{:.2}", rounded.abs())
    };
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{}${}.{}", sign, grouped, f),
        None => format!("{}${}", sign, grouped),
    }
}

fn status_color(status: &JobStatus) -> Color {
    match status {
        JobStatus::Completed => Color::Green,
        JobStatus::InProgress => Color::Blue,
        JobStatus::Delivered => Color::Magenta,
        JobStatus::Pending | JobStatus::Other(_) => Color::Grey,
    }
}

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    queue!(
        out,
        Print("\r\n"),
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset),
        Print("\r\n")
    )
}

fn render_headline(out: &mut impl Write, view: &DashboardView) -> io::Result<()> {
    let h = &view.headline;
    let cards = [
        ("Active Companies", h.active_companies.to_string(), Color::Blue),
        ("Motors in Database", h.total_motors.to_string(), Color::Magenta),
        ("Jobs This Month", h.jobs_this_month.to_string(), Color::Green),
        ("Monthly Revenue", format_currency(h.monthly_revenue), Color::DarkGreen),
    ];
    for (title, value, color) in cards {
        queue!(
            out,
            Print("  "),
            SetForegroundColor(color),
            Print(format!("{:>12}", value)),
            ResetColor,
            Print(format!("  {}\r\n", title))
        )?;
    }
    Ok(())
}

fn render_company(out: &mut impl Write, card: &CompanyCard) -> io::Result<()> {
    let last = card
        .last_activity
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "never".to_string());
    queue!(
        out,
        Print("  "),
        SetAttribute(Attribute::Bold),
        Print(&card.name),
        SetAttribute(Attribute::Reset),
        Print(format!(" [{}]\r\n", card.status_label)),
        Print(format!(
            "    active {} | motors {} | completed {} | est. value {}\r\n",
            card.active_jobs,
            card.motor_count,
            card.completed_jobs,
            format_currency(card.total_estimated_value)
        )),
        Print(format!(
            "    contact: {} | last activity: {}\r\n",
            card.contact_name, last
        ))
    )
}

fn render_recent(out: &mut impl Write, job: &RecentJob) -> io::Result<()> {
    let date = job
        .last_updated
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    queue!(
        out,
        Print(format!("  {:<10} ", job.job_number)),
        SetForegroundColor(status_color(&job.status)),
        Print(format!("{:<12}", job.status.to_string())),
        ResetColor,
        Print(format!(
            " {} {} | {}\r\n",
            date, job.company_name, job.summary
        ))
    )
}

fn render_alerts(out: &mut impl Write, view: &DashboardView) -> io::Result<()> {
    match view.alerts.status() {
        AlertStatus::AllClear => queue!(
            out,
            SetForegroundColor(Color::Green),
            Print("  All caught up!"),
            ResetColor,
            Print(" No urgent items require attention\r\n")
        ),
        AlertStatus::Attention(alerts) => {
            for alert in alerts {
                queue!(
                    out,
                    SetForegroundColor(Color::DarkYellow),
                    Print(format!("  ! {}", alert.headline())),
                    ResetColor,
                    Print(format!(" ({})\r\n", alert.hint()))
                )?;
            }
            Ok(())
        }
    }
}

/// Render the whole dashboard for `user`.
pub fn render_dashboard(out: &mut impl Write, view: &DashboardView, user: &str) -> io::Result<()> {
    queue!(
        out,
        Print(format!(
            "Welcome back, {}! {}\r\n",
            user,
            view.generated_at.format("%A, %B %-d, %Y")
        ))
    )?;

    heading(out, "Overview")?;
    render_headline(out, view)?;

    heading(out, "Company Activity Overview")?;
    if view.no_companies {
        queue!(
            out,
            Print("  No companies yet. Choose \"Add Company\" to add your first company.\r\n")
        )?;
    }
    for card in &view.overview {
        render_company(out, card)?;
    }

    heading(out, "Recent Jobs")?;
    for job in &view.recent {
        render_recent(out, job)?;
    }

    heading(out, "Alerts & Reminders")?;
    render_alerts(out, view)?;

    out.flush()
}
