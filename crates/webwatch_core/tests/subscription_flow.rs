use webwatch_core::{
    ContentSource, EmailNotifier, ExactCompare, Notifier, NotifyChannel, SmsNotifier,
    Subscription, TextOnlyCompare, User,
};

/// Source handing out a fixed queue of responses, then echoing the cache.
struct QueueSource {
    queue: Vec<String>,
}

impl QueueSource {
    fn new(responses: &[&str]) -> Self {
        let mut queue: Vec<String> = responses.iter().map(|s| s.to_string()).collect();
        queue.reverse();
        Self { queue }
    }
}

impl ContentSource for QueueSource {
    fn initial_content(&mut self, _url: &str) -> String {
        "<html><body>Initial content</body></html>".to_string()
    }

    fn fetch(&mut self, _url: &str, current: &str) -> String {
        self.queue.pop().unwrap_or_else(|| current.to_string())
    }
}

fn both_channels() -> Vec<Box<dyn Notifier>> {
    vec![
        Box::new(EmailNotifier::new("a@x.com")),
        Box::new(SmsNotifier::new("555")),
    ]
}

#[test]
fn detected_change_replaces_snapshot_exactly() {
    let mut source = QueueSource::new(&["<html><body>Updated content 1</body></html>"]);
    let mut subscription = Subscription::new(
        "http://e.com",
        Box::new(ExactCompare),
        both_channels(),
        source.initial_content("http://e.com"),
    );

    let report = subscription
        .check_once(&mut source)
        .expect("updated body should be detected");
    assert_eq!(
        subscription.snapshot(),
        "<html><body>Updated content 1</body></html>"
    );
    assert_eq!(report.event.subscription_id, subscription.id());
    assert_eq!(report.deliveries.len(), 2);
}

#[test]
fn delivery_lines_route_to_each_channel_recipient() {
    let mut source = QueueSource::new(&["changed body"]);
    let mut subscription = Subscription::new(
        "http://e.com",
        Box::new(ExactCompare),
        both_channels(),
        "initial".to_string(),
    );

    let report = subscription.check_once(&mut source).expect("change");
    let email = &report.deliveries[0];
    let sms = &report.deliveries[1];
    assert_eq!(email.channel, NotifyChannel::Email);
    assert!(email.line.starts_with("[EMAIL to a@x.com] Website 'http://e.com'"));
    assert_eq!(sms.channel, NotifyChannel::Sms);
    assert!(sms.line.starts_with("[SMS to 555] Website 'http://e.com'"));
}

#[test]
fn markup_only_change_is_quiet_under_text_compare() {
    // Same text wrapped in different tags: the naive stripper equalizes it.
    let mut source = QueueSource::new(&["<i>Initial content</i>"]);
    let mut subscription = Subscription::new(
        "http://e.com",
        Box::new(TextOnlyCompare),
        both_channels(),
        "<b>Initial content</b>".to_string(),
    );

    assert!(subscription.check_once(&mut source).is_none());
    assert_eq!(subscription.snapshot(), "<b>Initial content</b>");
}

#[test]
fn repeated_quiet_checks_leave_everything_untouched() {
    let mut source = QueueSource::new(&[]);
    let mut subscription = Subscription::new(
        "http://e.com",
        Box::new(ExactCompare),
        both_channels(),
        "stable".to_string(),
    );

    for _ in 0..10 {
        assert!(subscription.check_once(&mut source).is_none());
        assert_eq!(subscription.snapshot(), "stable");
    }
}

#[test]
fn user_listing_is_isolated_from_caller_mutation() {
    let mut user = User::new("A", "a@x.com", "555");
    user.add_subscription(Subscription::new(
        "http://e.com",
        Box::new(ExactCompare),
        Vec::new(),
        String::new(),
    ));

    let mut first = user.subscriptions();
    first.remove(0);
    assert!(first.is_empty());

    let second = user.subscriptions();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].url, "http://e.com");
}
