//! Compact base-code fixture for unit tests.

use super::base_code::BaseCode;

pub(crate) fn sample_base_code() -> BaseCode {
    BaseCode::new()
        .with_file(
            "index.html",
            "<html ng-app=\"angularAppName\">\n<head><title>appName</title></head>\n<body>\n{%insertScripts%}</body>\n</html>\n",
        )
        .with_file(
            "app/app.js",
            "angular.module('angularAppName', ['ui.router']);\n",
        )
        .with_file(
            "app/app.states.js",
            "angular.module('angularAppName').config(function($stateProvider) {\n\t$stateProvider\n{%states%}\t\t;\n});\n",
        )
        .with_file(
            "app/components/layout/views/sidebar.html",
            "<ul class=\"nav\">\n{%menuItems%}</ul>\n",
        )
        .with_file(
            "app/components/base/base.services.js",
            "angular.module('{%angularAppName%}').factory('{%objects%}Service', function($http) {\n\treturn { get{%Objects%}: function() { return $http.get('/{%objects%}'); } };\n});\n",
        )
        .with_file(
            "app/components/base/base.controller.js",
            "angular.module('{%angularAppName%}').controller('{%objects%}Controller', function({%objects%}Service) {});\n",
        )
        .with_file(
            "app/components/base/base.edit.controller.js",
            "angular.module('{%angularAppName%}').controller('{%object%}EditController', [{%injectOtherServices%}'{%objects%}Service', function({%otherServices%}{%objects%}Service) {\n\tvar vm = this;\n{%getForeignObjects%}\tfunction init() {\n{%foreignFunctionsCall%}\t}\n}]);\n",
        )
        .with_file(
            "app/components/base/views/base.list.html",
            "<h1>{%Objects%}</h1>\n<table>\n<tr>\n{%headerFields%}</tr>\n<tr ng-repeat=\"{%object%} in vm.{%objects%}\">\n{%listFields%}</tr>\n</table>\n",
        )
        .with_file(
            "app/components/base/views/base.edit.html",
            "<h1>{%Object%}</h1>\n<form>\n{%formFields%}{%foreignSelectsFields%}</form>\n",
        )
}
