use gradebook::{Course, Student};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn valid_identity_is_kept() {
    let student = Student::new("S123", "Alice");
    assert_eq!(student.id(), "S123");
    assert_eq!(student.name(), "Alice");
    assert!(student.courses().is_empty());
}

#[test]
fn missing_or_empty_identity_gets_defaults() {
    let student = Student::new("", None);
    assert_eq!(student.id(), "0000");
    assert_eq!(student.name(), "Unknown");

    let student = Student::new(None, "");
    assert_eq!(student.id(), "0000");
    assert_eq!(student.name(), "Unknown");
}

#[test]
fn enroll_appends_in_order() {
    let mut student = Student::new("1", "Bob");
    student.enroll(Course::new("Math", 3, "A"));
    student.enroll(Course::new("English", 4, "B"));
    student.enroll(Course::new("Art", 1, "C"));

    let names: Vec<&str> = student.courses().iter().map(Course::name).collect();
    assert_eq!(names, vec!["Math", "English", "Art"]);
}

#[test]
fn enrolling_nothing_is_a_no_op() {
    let mut student = Student::new("1", "Bob");
    student.enroll(Course::new("Math", 3, "A"));
    student.enroll(None);
    assert_eq!(student.courses().len(), 1);
}

#[test]
fn duplicate_enrollment_counts_twice() {
    let mut student = Student::new("1", "Bob");
    let math = Course::new("Math", 3, "A");
    let art = Course::new("Art", 3, "F");
    student.enroll(math.clone());
    student.enroll(math);
    student.enroll(art);

    assert_eq!(student.courses().len(), 3);
    assert_eq!(student.total_credits(), 9);
    // (4*3 + 4*3 + 0*3) / 9
    assert!(approx_eq(student.calculate_gpa(), 24.0 / 9.0));
}

#[test]
fn same_course_can_be_shared_between_students() {
    let course = Course::new("Math", 3, "B");
    let mut alice = Student::new("1", "Alice");
    let mut bob = Student::new("2", "Bob");
    alice.enroll(course.clone());
    bob.enroll(course);
    assert_eq!(alice.calculate_gpa(), 3.0);
    assert_eq!(bob.calculate_gpa(), 3.0);
}

#[test]
fn gpa_of_no_courses_is_zero() {
    assert_eq!(Student::new("1", "Bob").calculate_gpa(), 0.0);
}

#[test]
fn gpa_is_weighted_by_credit_hours() {
    let mut student = Student::new("1", "Bob");
    student.enroll(Course::new("Math", 3, "A"));
    student.enroll(Course::new("English", 4, "B"));
    let gpa = student.calculate_gpa();
    assert_eq!(gpa, 24.0 / 7.0);
    assert!(approx_eq(gpa, 3.428571428571));
}

#[test]
fn failing_grades_pull_the_average_down() {
    let mut student = Student::new("1", "Bob");
    student.enroll(Course::new("Science", 2, "F"));
    student.enroll(Course::new("Math", 3, "A"));
    assert!(approx_eq(student.calculate_gpa(), 2.4));
}

#[test]
fn all_a_grades_give_exactly_four() {
    let mut student = Student::new("1", "Bob");
    student.enroll(Course::new("X", 3, "A"));
    student.enroll(Course::new("X", 3, "A"));
    assert_eq!(student.calculate_gpa(), 4.0);
}

#[test]
fn all_f_grades_give_zero() {
    let mut student = Student::new("1", "Bob");
    student.enroll(Course::new("X", 3, "F"));
    student.enroll(Course::new("Y", 5, "F"));
    assert_eq!(student.calculate_gpa(), 0.0);
}

#[test]
fn invalid_letters_count_as_f() {
    let mut student = Student::new("1", "Bob");
    student.enroll(Course::new("Math", 3, "A"));
    student.enroll(Course::new("Mystery", 3, "Z"));
    assert_eq!(student.calculate_gpa(), 2.0);
}

#[test]
fn sanitized_credit_hours_are_what_gets_weighted() {
    let mut student = Student::new("1", "Bob");
    // 0 credits becomes 3
    student.enroll(Course::new("Math", 0, "A"));
    student.enroll(Course::new("Art", 3, "C"));
    assert_eq!(student.total_credits(), 6);
    assert_eq!(student.calculate_gpa(), 3.0);
}

#[test]
fn gpa_stays_within_zero_and_four() {
    let letters = ["A", "B", "C", "D", "F", "?"];
    let mut student = Student::new("1", "Bob");
    for (i, letter) in letters.iter().cycle().take(40).enumerate() {
        student.enroll(Course::new("C", (i % 8) as i64, *letter));
        let gpa = student.calculate_gpa();
        assert!((0.0..=4.0).contains(&gpa), "gpa {gpa}");
    }
}
