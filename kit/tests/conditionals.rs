//! `case` / `when` and compound assignment.
use test_case::test_case;
use unparser::{Node, unparse};

fn render(sexp: &str) -> String {
    let node: Node = sexp.parse().expect("valid s-expression");
    unparse(&node).expect("renders")
}

#[test]
fn case_with_subject_and_else() {
    insta::assert_snapshot!(
        render("(case (lvar :x) (when (int 1) (int 2) (send nil :foo)) (send nil :bar))"),
        @r"
    case x
    when 1, 2
      foo
    else
      bar
    end
    "
    );
}

#[test]
fn case_without_subject() {
    insta::assert_snapshot!(
        render("(case nil (when (send (lvar :a) :> (int 1)) (sym :big)) (when (true) nil) nil)"),
        @r"
    case
    when a > 1
      :big
    when true
    end
    "
    );
}

#[test]
fn when_patterns_keep_their_order() {
    assert_eq!(
        render("(case (lvar :x) (when (int 3) (int 1) (int 2) (nil)) nil)"),
        "case x\nwhen 3, 1, 2\n  nil\nend"
    );
}

#[test]
fn case_subject_is_terminated() {
    assert_eq!(
        render("(case (lvasgn :v (int 1)) (when (int 1) nil) nil)"),
        "case (v = 1)\nwhen 1\nend"
    );
}

#[test]
fn nested_case_indents_with_its_branch() {
    insta::assert_snapshot!(
        render("(case (lvar :a) (when (int 1) (case (lvar :b) (when (int 2) (sym :two)) (sym :other))) nil)"),
        @r"
    case a
    when 1
      case b
      when 2
        :two
      else
        :other
      end
    end
    "
    );
}

#[test_case("(and_asgn (lvasgn :a) (lvar :b))", "a &&= b"; "and")]
#[test_case("(or_asgn (ivasgn :@cache) (hash))", "@cache ||= {}"; "or")]
#[test_case("(or_asgn (lvasgn :a) (and (lvar :b) (lvar :c)))", "a ||= (b && c)"; "terminated value")]
#[test_case("(and_asgn (lvasgn :a) (lvasgn :b (int 1)))", "a &&= (b = 1)"; "assignment value")]
#[test_case("(op_asgn (lvasgn :a) :+ (int 1))", "a += 1"; "plus")]
#[test_case("(op_asgn (lvasgn :a) :<< (lvar :b))", "a <<= b"; "shift")]
#[test_case("(op_asgn (gvasgn :$n) :** (int 2))", "$n **= 2"; "power")]
#[test_case("(op_asgn (send (lvar :obj) :count) :- (int 1))", "obj.count -= 1"; "attribute target")]
#[test_case("(op_asgn (lvasgn :a) :+ (send (lvar :b) :* (int 2)))", "a += (b * 2)"; "binary value")]
fn compound_assignment(sexp: &str, expected: &str) {
    assert_eq!(render(sexp), expected);
}
