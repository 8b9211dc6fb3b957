// tests for the navigation shell

use zenvibe::{NavEvent, Navigation, Tab};

#[test]
fn test_tabs_render_in_fixed_order() {
    let items = Navigation.render(Tab::Discussion);
    let tabs: Vec<Tab> = items.iter().map(|i| i.tab).collect();
    assert_eq!(
        tabs,
        vec![Tab::Discussion, Tab::Chatbot, Tab::Resources, Tab::Help]
    );
}

#[test]
fn test_exactly_one_active_tab() {
    for active in Tab::ALL {
        let items = Navigation.render(active);
        let actives: Vec<Tab> = items.iter().filter(|i| i.is_active).map(|i| i.tab).collect();
        assert_eq!(actives, vec![active]);
    }
}

#[test]
fn test_select_reports_once_and_parent_owns_state() {
    let nav = Navigation;
    let mut active = Tab::Chatbot;
    let mut calls = Vec::new();

    nav.select(Tab::Resources, |event| {
        calls.push(event);
        let NavEvent::TabSelected(tab) = event;
        active = tab;
    });

    assert_eq!(calls, vec![NavEvent::TabSelected(Tab::Resources)]);
    assert_eq!(active, Tab::Resources);

    // the shell itself holds nothing; rendering follows whatever the parent passes
    assert!(nav.render(Tab::Chatbot)[1].is_active);
    assert!(!nav.render(Tab::Chatbot)[2].is_active);
}

#[test]
fn test_reselecting_active_tab_still_reports() {
    let mut calls = 0;
    Navigation.select(Tab::Help, |_| calls += 1);
    assert_eq!(calls, 1);
}

#[test]
fn test_parse_tab_ids() {
    assert_eq!("discussion".parse::<Tab>(), Ok(Tab::Discussion));
    assert_eq!("Chatbot".parse::<Tab>(), Ok(Tab::Chatbot));
    assert_eq!(" help ".parse::<Tab>(), Ok(Tab::Help));
    assert!("settings".parse::<Tab>().is_err());
}

#[test]
fn test_cycling_wraps_both_ways() {
    assert_eq!(Tab::Help.next(), Tab::Discussion);
    assert_eq!(Tab::Discussion.prev(), Tab::Help);
    assert_eq!(Tab::Chatbot.next(), Tab::Resources);
    assert_eq!(Tab::from_index(4), None);
}

#[test]
fn test_tab_serializes_lowercase() {
    let json = serde_json::to_string(&Navigation.render(Tab::Help)[3]).unwrap();
    assert_eq!(json, r#"{"tab":"help","label":"Get Help","isActive":true}"#);
}
