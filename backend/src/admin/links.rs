use common::views::CountLink;

pub fn templates_of_course(course_code: &str, count: i64) -> CountLink {
    CountLink {
        count,
        href: format!("/api/templates?course={}", course_code),
    }
}

pub fn applications_of_course(course_code: &str, count: i64) -> CountLink {
    CountLink {
        count,
        href: format!("/api/applications?course={}", course_code),
    }
}

pub fn applications_of_template(template_id: i64, count: i64) -> CountLink {
    CountLink {
        count,
        href: format!("/api/applications?template={}", template_id),
    }
}

pub fn template_change(template_id: i64) -> String {
    format!("/api/templates/{}", template_id)
}
