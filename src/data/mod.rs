//! Built-in sample data: the team pool, the published sports tables and the
//! charity totals shown when no team file is supplied.
//!
//! The published tables are precomputed. They are not derived from the
//! generated fixtures.

use crate::models::{CharityStanding, Competition, Sport, Standing, Team, TeamKind};
use crate::schedule::{DEFAULT_DIVISION, DEFAULT_SEASON};

/// The sample pool of mosque and madrassah teams.
pub fn sample_teams() -> Vec<Team> {
    vec![
        Team::new("elm-fc", "East London Mosque FC", TeamKind::Mosque, Sport::Football, "east-london-mosque", 1985)
            .with_home_venue("Mile End Park")
            .with_contact(Some("sports@elm.org.uk".to_string()), None),
        Team::new("green-lane-utd", "Green Lane United", TeamKind::Mosque, Sport::Football, "green-lane-masjid", 1992)
            .with_home_venue("Small Heath Park"),
        Team::new("mcr-central-fc", "Manchester Central Mosque FC", TeamKind::Mosque, Sport::Football, "manchester-central-mosque", 1998)
            .with_home_venue("Platt Fields"),
        Team::new("brick-lane-fc", "Brick Lane Jamme Masjid FC", TeamKind::Mosque, Sport::Football, "brick-lane-jamme-masjid", 2001)
            .with_home_venue("Weavers Fields"),
        Team::new("darul-uloom-jnr", "Darul Uloom Juniors", TeamKind::Madrassah, Sport::Football, "darul-uloom-london", 2005),
        Team::new("al-noor-academy", "Al-Noor Academy", TeamKind::Madrassah, Sport::Football, "al-noor-academy", 2010)
            .with_home_venue("Wanstead Flats"),
        Team::new("finsbury-park-fc", "Finsbury Park Mosque FC", TeamKind::Mosque, Sport::Football, "finsbury-park-mosque", 1994)
            .inactive(),
        Team::new("elm-cc", "East London Mosque CC", TeamKind::Mosque, Sport::Cricket, "east-london-mosque", 1990)
            .with_home_venue("Victoria Park"),
        Team::new("green-lane-cc", "Green Lane Cricket Club", TeamKind::Mosque, Sport::Cricket, "green-lane-masjid", 1995)
            .with_home_venue("Cannon Hill Park"),
        Team::new("jamia-al-hudaa", "Jamia Al-Hudaa XI", TeamKind::Madrassah, Sport::Cricket, "jamia-al-hudaa", 2008),
        Team::new("leicester-cc", "Leicester Central Mosque CC", TeamKind::Mosque, Sport::Cricket, "leicester-central-mosque", 1999)
            .with_home_venue("Spinney Hill Park")
            .with_contact(None, Some("0116 000 0000".to_string())),
        Team::new("bradford-cc", "Bradford Grand Mosque CC", TeamKind::Mosque, Sport::Cricket, "bradford-grand-mosque", 2003)
            .with_home_venue("Bowling Park"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn published_row(
    team: &Team,
    position: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_against: u32,
    form: &str,
) -> Standing {
    let competition = Competition::new(team.sport, DEFAULT_DIVISION, DEFAULT_SEASON);
    let mut row = Standing::new(team, &competition);
    row.matches_played = wins + draws + losses;
    row.wins = wins;
    row.draws = draws;
    row.losses = losses;
    row.goals_for = goals_for;
    row.goals_against = goals_against;
    row.goal_difference = i64::from(goals_for) - i64::from(goals_against);
    row.points = 3 * wins + draws;
    row.position = position;
    row.form = form.to_string();
    row
}

/// The published tables for every sport, already ranked.
pub fn sample_sports_standings() -> Vec<Standing> {
    let teams = sample_teams();
    let find = |id: &str| teams.iter().find(|t| t.id.as_str() == id);

    let rows: [(&str, u32, u32, u32, u32, u32, u32, &str); 11] = [
        ("elm-fc", 1, 4, 1, 0, 12, 4, "WWDWW"),
        ("green-lane-utd", 2, 3, 1, 1, 9, 6, "WLWDW"),
        ("mcr-central-fc", 3, 2, 1, 2, 8, 8, "LWDWL"),
        ("brick-lane-fc", 4, 2, 0, 3, 7, 9, "WLLWL"),
        ("darul-uloom-jnr", 5, 1, 1, 3, 5, 9, "LDLWL"),
        ("al-noor-academy", 6, 1, 0, 4, 4, 9, "LLWLL"),
        ("elm-cc", 1, 3, 0, 1, 620, 540, "WWLW"),
        ("leicester-cc", 2, 3, 0, 1, 598, 552, "WLWW"),
        ("green-lane-cc", 3, 2, 0, 2, 575, 570, "LWWL"),
        ("bradford-cc", 4, 1, 1, 2, 530, 560, "DLWL"),
        ("jamia-al-hudaa", 5, 0, 1, 3, 480, 581, "LLDL"),
    ];

    rows.iter()
        .filter_map(|&(id, position, w, d, l, gf, ga, form)| {
            find(id).map(|team| published_row(team, position, w, d, l, gf, ga, form))
        })
        .collect()
}

/// Funds raised per community, unranked.
pub fn sample_charity_standings() -> Vec<CharityStanding> {
    vec![
        CharityStanding::new("east-london-mosque", "East London Mosque", 18_450.75).with_donor_count(412),
        CharityStanding::new("green-lane-masjid", "Green Lane Masjid", 22_310.00).with_donor_count(380),
        CharityStanding::new("manchester-central-mosque", "Manchester Central Mosque", 9_875.50).with_donor_count(201),
        CharityStanding::new("brick-lane-jamme-masjid", "Brick Lane Jamme Masjid", 12_040.00).with_donor_count(256),
        CharityStanding::new("darul-uloom-london", "Darul Uloom London", 6_300.25).with_donor_count(143),
        CharityStanding::new("leicester-central-mosque", "Leicester Central Mosque", 15_600.00).with_donor_count(298),
    ]
}
