//! Consulting script: a fixed four-section Korean narrative built from the
//! diagnosis results.

use chrono::NaiveDateTime;

use crate::catalog::{Category, Solution};
use crate::facts::CompanyFacts;
use crate::score::{ScoreSummary, ScoredItem};

/// Used in the greeting when nothing carries risk.
pub const DEFAULT_TOP_SECTION: &str = "주요 영역";
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M";

const BANNER_WIDTH: usize = 52;
const ITEM_RULE_WIDTH: usize = 40;

const CLOSING: &str = "
오늘 진단 결과를 기반으로, 귀사에 맞는
'종합 법인 재무 컨설팅 제안서'를 별도로 작성하여 드리겠습니다.

세무사, 회계사, 법무사 등 전문가와 협업하여
최적의 구조를 설계드리고, 단계별 실행 계획까지
제안드리겠습니다.

다음 단계로 상세 제안서 검토 일정을 잡아드리면 되겠습니다.
언제 가능하신가요?
";

/// Label for a selected answer, by score.
pub fn answer_label(score: f64) -> &'static str {
  if score == 1.0 {
    "예"
  } else if score == 0.5 {
    "일부 해당"
  } else {
    "아니오"
  }
}

/// Priority items grouped by category, categories in first-seen order.
fn group_by_section(items: &[ScoredItem]) -> Vec<(Category, Vec<&ScoredItem>)> {
  let mut groups: Vec<(Category, Vec<&ScoredItem>)> = Vec::new();
  for item in items {
    match groups.iter_mut().find(|(section, _)| *section == item.section) {
      Some((_, members)) => members.push(item),
      None => groups.push((item.section, vec![item])),
    }
  }
  groups
}

fn section_header(lines: &mut Vec<String>, title: &str) {
  let rule = "─".repeat(BANNER_WIDTH);
  lines.push(rule.clone());
  lines.push(format!(" {}", title));
  lines.push(rule);
}

/// Render the script. `generated_at` is the only time source.
pub fn generate_script(
  facts: &CompanyFacts,
  summary: &ScoreSummary,
  priorities: &[ScoredItem],
  solutions: &[Solution],
  generated_at: NaiveDateTime,
) -> String {
  let pct = summary.overall_percentage;
  let label = summary.overall_level.label();
  let ceo = facts.ceo();
  let banner = "=".repeat(BANNER_WIDTH);

  let mut lines = vec![
    banner.clone(),
    "   GFC 상담 스크립트  |  기업재무컨설팅".to_string(),
    "   진단 기반 자동생성".to_string(),
    banner.clone(),
    String::new(),
    format!("  기업명    : {}", facts.company()),
    format!("  업종      : {}", facts.industry()),
    format!("  종업원 수 : {}명", facts.employees()),
    format!("  대표자    : {}", ceo),
    format!("  설립 연차 : {}", facts.established()),
    format!("  연 매출   : {}", facts.revenue()),
    format!("  진단 충족율: {:.0}% ({})", pct, label),
    format!("  생성일    : {}", generated_at.format(TIMESTAMP_FORMAT)),
    String::new(),
  ];

  section_header(&mut lines, "1. 도입 인사");
  let top_section = priorities
    .first()
    .map(|it| it.section.name())
    .unwrap_or(DEFAULT_TOP_SECTION);
  lines.push(format!(
    "
안녕하세요, {ceo}님. GFC 기업재무컨설팅 담당 컨설턴트입니다.

오늘 귀사의 법인 리스크 사전 진단을 완료했는데,
종합 리스크율이 {pct:.0}%({label}) 수준으로 나왔습니다.

특히 '{top_section}' 부분에서 즉각적인 대비가 필요한
사항들이 도출되었습니다.

오늘 주요 내용을 안내드리고, 귀사에 맞는
종합 컨설팅 제안까지 함께 검토하겠습니다.
"
  ));

  section_header(&mut lines, "2. 리스크별 상세 상담");
  for (section, items) in group_by_section(priorities) {
    lines.push(format!("\n▸ {} ({}건 해당)", section.name(), items.len()));
    lines.push("-".repeat(ITEM_RULE_WIDTH));
    for item in items {
      lines.push(format!("  📌 진단 항목 (가중치 {})", item.weight));
      lines.push(format!("     질문 : {}", item.text));
      lines.push(format!("     응답 : {}", answer_label(item.score)));
      lines.push(String::new());
    }
  }

  section_header(&mut lines, "3. 추천 솔루션 제안");
  for solution in solutions {
    lines.push(format!("\n  {} {}", solution.icon, solution.name));
    lines.push(format!("     {}", solution.description));
  }

  lines.push(String::new());
  section_header(&mut lines, "4. 마무리 및 다음 단계");
  lines.push(CLOSING.to_string());
  lines.push(banner);

  lines.join("\n")
}
